use super::BookStore;
use crate::book::AddressBook;
use crate::error::{Result, RoloError};
use std::fs;
use std::path::{Path, PathBuf};

const BOOK_FILENAME: &str = "book.json";

pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn book_path(&self) -> PathBuf {
        self.data_dir.join(BOOK_FILENAME)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(RoloError::Io)?;
        }
        Ok(())
    }
}

impl BookStore for FileStore {
    fn load(&self) -> Result<AddressBook> {
        let path = self.book_path();
        if !path.exists() {
            return Ok(AddressBook::new());
        }
        let content = fs::read_to_string(&path).map_err(RoloError::Io)?;
        let book: AddressBook =
            serde_json::from_str(&content).map_err(RoloError::Serialization)?;
        Ok(book)
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.ensure_dir(&self.data_dir)?;
        let content = serde_json::to_string_pretty(book).map_err(RoloError::Serialization)?;
        fs::write(self.book_path(), content).map_err(RoloError::Io)?;
        Ok(())
    }
}
