use crate::book::AddressBook;
use crate::commands::{Args, CmdMessage, CmdResult, Context};
use crate::error::Result;
use crate::fields::Phone;

/// `phone <name>`: lists the contact's phones, one per line.
pub fn run(book: &mut AddressBook, args: &Args, _ctx: &Context) -> Result<CmdResult> {
    let record = book.find(args.get(0)?)?;

    if record.phones().is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(format!(
            "{} has no phone numbers.",
            record.name().capitalized()
        ))));
    }

    let phones = record
        .phones()
        .iter()
        .map(Phone::to_string)
        .collect();
    Ok(CmdResult::default().with_listing(phones))
}
