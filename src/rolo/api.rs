//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as
//! the single entry point for all rolo operations, regardless of the UI
//! being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns the session**: the address book is loaded once, mutated by
//!   commands, and written back on [`RoloApi::save`]
//! - **Dispatches** to the appropriate command function
//! - **Supplies ambient inputs** (today's date, the configured reminder
//!   window) so command functions stay pure and testable
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **Presentation concerns**: returns data structures, not strings
//!
//! ## Generic Over BookStore
//!
//! `RoloApi<S: BookStore>` is generic over the storage backend:
//! - Production: `RoloApi<FileStore>`
//! - Testing: `RoloApi<InMemoryStore>`
//!
//! This enables testing the API layer without touching the filesystem.

use crate::book::AddressBook;
use crate::commands;
use crate::config::RoloConfig;
use crate::error::Result;
use crate::store::BookStore;
use chrono::Local;

/// The main API facade for rolo operations.
///
/// Generic over `BookStore` to allow different storage backends.
/// All UI clients should interact through this API.
pub struct RoloApi<S: BookStore> {
    store: S,
    config: RoloConfig,
    book: AddressBook,
}

impl<S: BookStore> RoloApi<S> {
    /// Loads the saved address book from `store` and starts a session.
    pub fn load(store: S, config: RoloConfig) -> Result<Self> {
        let book = store.load()?;
        Ok(Self {
            store,
            config,
            book,
        })
    }

    pub fn add_contact(&mut self, name: &str, number: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.book, name, number)
    }

    pub fn change_phone(
        &mut self,
        name: &str,
        old: &str,
        new: &str,
    ) -> Result<commands::CmdResult> {
        commands::change::run(&mut self.book, name, old, new)
    }

    pub fn phones(&self, name: &str) -> Result<commands::CmdResult> {
        commands::phone::run(&self.book, name)
    }

    pub fn list_contacts(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.book)
    }

    pub fn delete_contact(
        &mut self,
        name: &str,
        number: Option<&str>,
    ) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.book, name, number)
    }

    pub fn add_birthday(&mut self, name: &str, date: &str) -> Result<commands::CmdResult> {
        commands::add_birthday::run(&mut self.book, name, date)
    }

    pub fn show_birthday(&self, name: &str) -> Result<commands::CmdResult> {
        commands::show_birthday::run(&self.book, name)
    }

    /// Upcoming birthdays from today through the configured window.
    pub fn upcoming_birthdays(&self) -> Result<commands::CmdResult> {
        let today = Local::now().date_naive();
        commands::birthdays::run(&self.book, today, self.config.get_window_days())
    }

    /// Writes the current book back to the store.
    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.book)
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
