#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::utils::{
        navigation::{Navigate, Navigator},
        storage::{KeyValueStore, StorageError},
    };
    use std::{cell::RefCell, rc::Rc};

    /// Records every path instead of touching `window.location`.
    #[derive(Clone, Default)]
    pub struct RecordingNavigator {
        visits: Rc<RefCell<Vec<String>>>,
    }

    impl RecordingNavigator {
        pub fn navigator(&self) -> Navigator {
            Navigator::new(Rc::new(self.clone()))
        }

        pub fn visits(&self) -> Vec<String> {
            self.visits.borrow().clone()
        }
    }

    impl Navigate for RecordingNavigator {
        fn navigate(&self, path: &str) {
            self.visits.borrow_mut().push(path.to_string());
        }
    }

    /// Storage that refuses every write, like a browser with storage disabled.
    #[derive(Clone, Copy, Default)]
    pub struct ReadOnlyStorage;

    impl KeyValueStore for ReadOnlyStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write(key.to_string()))
        }

        fn clear(&self, key: &str) -> Result<(), StorageError> {
            Err(StorageError::Remove(key.to_string()))
        }
    }
}
