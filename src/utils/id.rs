//! Record id generation.

use rand::Rng;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 10;

/// Unique id: creation instant in base 36 plus a random base-36 suffix. The
/// random tail keeps ids distinct across rapid calls within one millisecond.
pub fn generate_id(now_millis: i64) -> String {
    let mut rng = rand::thread_rng();
    let mut id = to_base36(now_millis.max(0) as u64);
    for _ in 0..SUFFIX_LEN {
        id.push(BASE36[rng.gen_range(0..BASE36.len())] as char);
    }
    id
}

fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();
    // Base-36 digits are always valid ASCII.
    String::from_utf8(digits).unwrap_or_default()
}
