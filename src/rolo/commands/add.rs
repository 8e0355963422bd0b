use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Name, Record};

/// Adds `number` to an existing contact, or creates the contact first.
pub fn run(book: &mut AddressBook, name: &str, number: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if let Some(record) = book.find_mut(name) {
        record.add_phone(number)?;
        result.add_message(CmdMessage::success(format!(
            "Phone {} added to {}.",
            number, name
        )));
    } else {
        let mut record = Record::new(Name::new(name)?);
        record.add_phone(number)?;
        book.add_record(record);
        result.add_message(CmdMessage::success(format!("Contact added: {}.", name)));
    }

    Ok(result)
}
