use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Reports a contact's birthday, if one was recorded.
pub fn run(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match book.find(name) {
        None => {
            result.add_message(CmdMessage::warning(format!("No contact named {}.", name)));
        }
        Some(record) => match record.birthday() {
            Some(birthday) => {
                result.add_message(CmdMessage::info(format!(
                    "{} was born on {}.",
                    name, birthday
                )));
            }
            None => {
                result.add_message(CmdMessage::info(format!(
                    "No birthday on file for {}.",
                    name
                )));
            }
        },
    }

    Ok(result)
}
