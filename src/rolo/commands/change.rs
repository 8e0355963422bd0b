use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Replaces one phone with another on an existing contact.
pub fn run(book: &mut AddressBook, name: &str, old: &str, new: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match book.find_mut(name) {
        None => {
            result.add_message(CmdMessage::warning(format!("No contact named {}.", name)));
        }
        Some(record) => {
            if record.edit_phone(old, new)? {
                result.add_message(CmdMessage::success(format!(
                    "Phone updated for {}: {} -> {}.",
                    name, old, new
                )));
            } else {
                result.add_message(CmdMessage::warning(format!(
                    "{} has no phone {}.",
                    name, old
                )));
            }
        }
    }

    Ok(result)
}
