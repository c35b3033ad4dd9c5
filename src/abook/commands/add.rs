use crate::book::AddressBook;
use crate::commands::{record_message, Args, CmdResult, Context};
use crate::error::{BookError, Result};
use crate::fields::Name;
use crate::record::{Record, RecordError};
use tracing::info;

/// `add <name> <phone>`: adds a phone, creating the contact on first use.
pub fn run(book: &mut AddressBook, args: &Args, _ctx: &Context) -> Result<CmdResult> {
    let name = args.get(0)?;
    let phone = args.get(1)?;

    let outcome = match book.find_mut(name) {
        Ok(record) => record.add_phone(phone).map(|_| ()),
        Err(BookError::ContactNotFound(_)) => create_with_phone(book, name, phone),
        Err(e) => return Err(e),
    };

    Ok(CmdResult::default().with_message(record_message(outcome, |_| "Phone added.".into())))
}

/// The record is only stored once both the name and the phone are valid.
fn create_with_phone(
    book: &mut AddressBook,
    name: &str,
    phone: &str,
) -> std::result::Result<(), RecordError> {
    let mut record = Record::new(Name::parse(name)?);
    record.add_phone(phone)?;
    info!(contact = %record.name(), "creating contact");
    book.add_record(record);
    Ok(())
}
