use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::KvStore;

/// In-memory backend for tests and ephemeral sessions. Clones share the same
/// underlying map, so a test can keep a handle to inspect what a component
/// wrote.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    map: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.borrow().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.map
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}
