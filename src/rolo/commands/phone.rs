use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Looks up one contact so the caller can show its phones.
pub fn run(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match book.find(name) {
        Some(record) => result.listed.push(record.clone()),
        None => {
            result.add_message(CmdMessage::warning(format!("No contact named {}.", name)));
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::fixtures::BookFixture;

    #[test]
    fn returns_the_matching_record() {
        let book = BookFixture::new()
            .with_contact("John", &["0123456789"])
            .book;
        let result = run(&book, "John").unwrap();
        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.listed[0].name().as_str(), "John");
    }

    #[test]
    fn lookup_is_exact() {
        let book = BookFixture::new()
            .with_contact("John", &["0123456789"])
            .book;
        let result = run(&book, "john").unwrap();
        assert!(result.listed.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
