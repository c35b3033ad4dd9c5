use crate::book::AddressBook;
use crate::commands::{record_message, Args, CmdMessage, CmdResult, Context};
use crate::error::Result;

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add(book: &mut AddressBook, args: &Args, _ctx: &Context) -> Result<CmdResult> {
    let name = args.get(0)?;
    let date = args.get(1)?;

    let record = book.find_mut(name)?;
    let message = record_message(record.add_birthday(date), |_| "Birthday added.".into());
    Ok(CmdResult::default().with_message(message))
}

/// `show-birthday <name>`
pub fn show(book: &mut AddressBook, args: &Args, _ctx: &Context) -> Result<CmdResult> {
    let record = book.find(args.get(0)?)?;
    let message = match record.show_birthday() {
        Ok(text) => CmdMessage::info(text),
        Err(e) => CmdMessage::warning(e.to_string()),
    };
    Ok(CmdResult::default().with_message(message))
}
