use web_sys::window;

/// Key/value preference storage. The browser implementation is
/// `localStorage`; tests use an in-memory map.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

pub struct LocalStorage;

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|storage| storage.get_item(key).ok())
            .flatten()
    }

    fn set(&self, key: &str, value: &str) {
        match window().and_then(|w| w.local_storage().ok()).flatten() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    log::warn!("Could not persist {}={}", key, value);
                }
            }
            None => log::warn!("localStorage unavailable, {} not persisted", key),
        }
    }
}

#[cfg(test)]
pub mod memory {
    use super::PreferenceStore;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    pub struct MemoryStore {
        values: RefCell<HashMap<String, String>>,
    }

    impl PreferenceStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.values.borrow_mut().insert(key.to_string(), value.to_string());
        }
    }
}
