use super::BookStore;
use crate::book::AddressBook;
use crate::error::{Result, RoloError};

/// Keeps the snapshot as a JSON string so tests exercise the same
/// serialization path as [`super::fs::FileStore`].
#[derive(Debug, Default)]
pub struct InMemoryStore {
    snapshot: Option<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookStore for InMemoryStore {
    fn load(&self) -> Result<AddressBook> {
        match &self.snapshot {
            Some(content) => serde_json::from_str(content).map_err(RoloError::Serialization),
            None => Ok(AddressBook::new()),
        }
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        let content = serde_json::to_string_pretty(book).map_err(RoloError::Serialization)?;
        self.snapshot = Some(content);
        Ok(())
    }
}
