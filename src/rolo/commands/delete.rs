use crate::book::{AddressBook, DeleteOutcome};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Deletes a whole contact, or one phone when `number` is given.
pub fn run(book: &mut AddressBook, name: &str, number: Option<&str>) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match book.delete(name, number) {
        DeleteOutcome::RemovedContact(_) => {
            result.add_message(CmdMessage::success(format!("Contact deleted: {}.", name)));
        }
        DeleteOutcome::RemovedPhone(phone) => {
            result.add_message(CmdMessage::success(format!(
                "Phone {} removed from {}.",
                phone, name
            )));
        }
        DeleteOutcome::ContactNotFound => {
            result.add_message(CmdMessage::warning(format!("No contact named {}.", name)));
        }
        DeleteOutcome::PhoneNotFound => {
            result.add_message(CmdMessage::warning(format!(
                "{} has no phone {}.",
                name,
                number.unwrap_or_default()
            )));
        }
    }

    Ok(result)
}
