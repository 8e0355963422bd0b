//! # Storage Layer
//!
//! This module defines the storage abstraction for rolo. The [`BookStore`]
//! trait allows the application to work with different storage backends.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - The whole address book lives in a single `book.json` snapshot
//!   - A missing snapshot means an empty book; a snapshot that exists but
//!     cannot be read or parsed is an error, never silently discarded
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! <data dir>/
//! ├── book.json           # All contacts (JSON array of records)
//! └── config.json         # Reminder window configuration
//! ```

use crate::book::AddressBook;
use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for address book persistence.
///
/// The book is small enough to load and save whole, so the contract is a
/// pair of snapshot operations rather than per-record access.
pub trait BookStore {
    /// Load the saved book, or an empty one when nothing was saved yet
    fn load(&self) -> Result<AddressBook>;

    /// Persist the whole book, replacing any previous snapshot
    fn save(&mut self, book: &AddressBook) -> Result<()>;
}
