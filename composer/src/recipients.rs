use crate::error::{ComposeError, Result};
use crate::types::{Recipient, RecipientClass, RecipientId};
use crate::utils::{new_id, validate_email};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipientStore {
    list: Vec<Recipient>,
}

impl RecipientStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty input is ignored (`Ok(None)`), an address that does not
    /// validate is returned as `InvalidAddress` and nothing is added.
    pub fn add(&mut self, address: &str, class: RecipientClass) -> Result<Option<RecipientId>> {
        if address.is_empty() {
            return Ok(None);
        }
        if !validate_email(address) {
            return Err(ComposeError::InvalidAddress(address.to_string()));
        }
        let id = new_id();
        self.list.push(Recipient {
            id: id.clone(),
            address: address.to_string(),
            class,
        });
        Ok(Some(id))
    }

    pub fn remove(&mut self, id: &str) -> Option<Recipient> {
        let ind = self.list.iter().position(|row| row.id == id)?;
        Some(self.list.remove(ind))
    }

    pub fn filter(&self, class: RecipientClass) -> Vec<Recipient> {
        self.list.iter().filter(|row| row.class == class).cloned().collect()
    }

    pub fn has(&self, class: RecipientClass) -> bool {
        self.list.iter().any(|row| row.class == class)
    }

    pub fn addresses(&self, class: RecipientClass) -> Vec<String> {
        self.list.iter()
            .filter(|row| row.class == class)
            .map(|row| row.address.clone())
            .collect()
    }

    pub fn as_slice(&self) -> &[Recipient] {
        &self.list
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Restores a persisted list. Entries repeating an id already seen are dropped.
    pub fn replace(&mut self, list: Vec<Recipient>) {
        self.list.clear();
        for row in list {
            if !self.list.iter().any(|item| item.id == row.id) {
                self.list.push(row);
            }
        }
    }
}
