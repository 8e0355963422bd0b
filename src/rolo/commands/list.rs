use crate::book::AddressBook;
use crate::commands::CmdResult;
use crate::error::Result;

/// Lists every record in name order.
pub fn run(book: &AddressBook) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed(book.records().cloned().collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::fixtures::BookFixture;

    #[test]
    fn lists_all_records_sorted_by_name() {
        let book = BookFixture::new()
            .with_contact("Zoe", &[])
            .with_contact("Anna", &["0123456789"])
            .book;
        let result = run(&book).unwrap();
        let names: Vec<&str> = result.listed.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["Anna", "Zoe"]);
    }

    #[test]
    fn empty_book_lists_nothing() {
        let result = run(&AddressBook::new()).unwrap();
        assert!(result.listed.is_empty());
    }
}
