use crate::types::{Attachment, AttachmentId, SelectedFile};
use crate::utils::new_id;

#[derive(Debug, Clone)]
pub struct AttachmentStore<F> {
    list: Vec<Attachment<F>>,
}

impl<F> Default for AttachmentStore<F> {
    fn default() -> Self {
        Self { list: vec![] }
    }
}

impl<F> AttachmentStore<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_batch<I>(&mut self, files: I) -> Vec<AttachmentId>
        where I: IntoIterator<Item=SelectedFile<F>>
    {
        let batch = files.into_iter()
            .map(|file| Attachment {
                id: new_id(),
                name: file.name,
                size: file.size,
                mime_type: file.mime_type,
                payload: file.payload,
            })
            .collect::<Vec<_>>();
        let ids = batch.iter().map(|item| item.id.clone()).collect();
        self.list.extend(batch);
        ids
    }

    pub fn remove(&mut self, id: &str) -> Option<Attachment<F>> {
        let ind = self.list.iter().position(|item| item.id == id)?;
        Some(self.list.remove(ind))
    }

    pub fn get(&self, id: &str) -> Option<&Attachment<F>> {
        self.list.iter().find(|item| item.id == id)
    }

    pub fn as_slice(&self) -> &[Attachment<F>] {
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
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, size: u64) -> SelectedFile<Vec<u8>> {
        SelectedFile {
            name: name.to_string(),
            size,
            mime_type: "text/plain".to_string(),
            payload: vec![0; size as usize],
        }
    }

    #[test]
    fn test_add_batch_keeps_order() {
        let mut store = AttachmentStore::new();
        let ids = store.add_batch(vec![file("a.txt", 3), file("b.txt", 5)]);
        assert_eq!(ids.len(), 2);
        assert_ne!(ids[0], ids[1]);
        let names = store.as_slice().iter().map(|item| item.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, ["a.txt", "b.txt"]);
        assert_eq!(store.get(&ids[1]).unwrap().payload.len(), 5);
    }

    #[test]
    fn test_add_batch_appends() {
        let mut store = AttachmentStore::new();
        store.add_batch(vec![file("a.txt", 1)]);
        store.add_batch(vec![file("b.txt", 1), file("c.txt", 1)]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut store = AttachmentStore::new();
        let ids = store.add_batch(vec![file("a.txt", 1)]);
        assert!(store.remove("nope").is_none());
        assert_eq!(store.len(), 1);
        assert!(store.remove(&ids[0]).is_some());
        assert!(store.is_empty());
    }

    #[test]
    fn test_no_size_limit() {
        let mut store: AttachmentStore<()> = AttachmentStore::new();
        store.add_batch(vec![SelectedFile {
            name: "huge.iso".to_string(),
            size: u64::MAX / 2,
            mime_type: String::new(),
            payload: (),
        }]);
        assert_eq!(store.len(), 1);
    }
}
