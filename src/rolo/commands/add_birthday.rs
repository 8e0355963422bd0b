use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Records a contact's birthday. Each contact gets exactly one.
pub fn run(book: &mut AddressBook, name: &str, date: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match book.find_mut(name) {
        None => {
            result.add_message(CmdMessage::warning(format!("No contact named {}.", name)));
        }
        Some(record) => {
            record.add_birthday(date)?;
            result.add_message(CmdMessage::success(format!(
                "Birthday for {} recorded: {}.",
                name, date
            )));
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::fixtures::BookFixture;
    use crate::commands::MessageLevel;
    use crate::error::RoloError;

    #[test]
    fn stores_the_birthday() {
        let mut book = BookFixture::new()
            .with_contact("John", &["0123456789"])
            .book;
        run(&mut book, "John", "10.06.1990").unwrap();
        assert_eq!(
            book.find("John").unwrap().birthday().unwrap().to_string(),
            "10.06.1990"
        );
    }

    #[test]
    fn missing_contact_warns_instead_of_failing() {
        let mut book = AddressBook::new();
        let result = run(&mut book, "Nobody", "10.06.1990").unwrap();
        assert!(matches!(result.messages[0].level, MessageLevel::Warning));
    }

    #[test]
    fn second_birthday_is_rejected() {
        let mut book = BookFixture::new()
            .with_birthday("John", "0123456789", "10.06.1990")
            .book;
        let err = run(&mut book, "John", "11.06.1990").unwrap_err();
        assert!(matches!(err, RoloError::BirthdayTaken));
    }

    #[test]
    fn malformed_date_is_an_error() {
        let mut book = BookFixture::new()
            .with_contact("John", &["0123456789"])
            .book;
        let err = run(&mut book, "John", "1990-06-10").unwrap_err();
        assert!(matches!(err, RoloError::InvalidBirthday(_)));
        assert!(book.find("John").unwrap().birthday().is_none());
    }
}
