use chrono::{DateTime, Utc};

/// Injectable time source. Production code uses [`SystemClock`]; tests pin
/// the clock to make status derivation deterministic.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
