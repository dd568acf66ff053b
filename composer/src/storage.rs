use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ComposeError, Result};

/// Keyed string blobs, the shape of browser local storage.
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

impl<S: Storage + ?Sized> Storage for &S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }
    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

impl<S: Storage + ?Sized> Storage for Rc<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }
    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.items.borrow().contains_key(key)
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

pub fn read_json<T, S>(storage: &S, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
        S: Storage + ?Sized
{
    match storage.get(key)? {
        Some(text) => serde_json::from_str(&text)
            .map(Some)
            .map_err(|source| ComposeError::Serialize { key: key.to_string(), source }),
        None => Ok(None),
    }
}

pub fn write_json<T, S>(storage: &S, key: &str, data: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
        S: Storage + ?Sized
{
    let text = serde_json::to_string(data)
        .map_err(|source| ComposeError::Serialize { key: key.to_string(), source })?;
    storage.set(key, &text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_set_get_remove() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("k").unwrap(), None);
        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
        storage.remove("k").unwrap();
        assert!(!storage.contains("k"));
        storage.remove("k").unwrap();
    }

    #[test]
    fn test_json_helpers() {
        let storage = MemoryStorage::new();
        write_json(&storage, "list", &vec![1, 2, 3]).unwrap();
        let list: Option<Vec<i32>> = read_json(&storage, "list").unwrap();
        assert_eq!(list, Some(vec![1, 2, 3]));

        storage.set("list", "{not json").unwrap();
        let err = read_json::<Vec<i32>, _>(&storage, "list").unwrap_err();
        assert!(matches!(err, ComposeError::Serialize { .. }));
    }

    #[test]
    fn test_shared_through_rc() {
        let storage = Rc::new(MemoryStorage::new());
        let handle = Rc::clone(&storage);
        handle.set("k", "v").unwrap();
        assert!(storage.contains("k"));
    }
}
