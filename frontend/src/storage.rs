use composer::error::{ComposeError, Result};
use composer::Storage;

use crate::utils::get_local_storage;

/// `window.localStorage`. Missing storage (private mode, sandboxed frames)
/// reads as empty and fails on write.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

fn storage_error(key: &str, message: &str) -> ComposeError {
    ComposeError::Storage {
        key: key.to_string(),
        message: message.to_string(),
    }
}

impl Storage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match get_local_storage() {
            Some(local_storage) => local_storage.get_item(key)
                .map_err(|err| storage_error(key, &format!("{:?}", err))),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let local_storage = get_local_storage().ok_or_else(|| storage_error(key, "local storage unavailable"))?;
        local_storage.set_item(key, value)
            .map_err(|err| storage_error(key, &format!("{:?}", err)))
    }

    fn remove(&self, key: &str) -> Result<()> {
        match get_local_storage() {
            Some(local_storage) => local_storage.remove_item(key)
                .map_err(|err| storage_error(key, &format!("{:?}", err))),
            None => Ok(()),
        }
    }
}
