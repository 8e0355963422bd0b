use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use chrono::NaiveDate;

/// Collects the birthdays observed within the next `window_days` days.
pub fn run(book: &AddressBook, today: NaiveDate, window_days: i64) -> Result<CmdResult> {
    let mut result =
        CmdResult::default().with_reminders(book.upcoming_birthdays(today, window_days));

    if result.reminders.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No birthdays in the next {} days.",
            window_days
        )));
    }

    Ok(result)
}
