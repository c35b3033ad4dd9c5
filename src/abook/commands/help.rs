use crate::book::AddressBook;
use crate::commands::{Args, CmdMessage, CmdResult, Context, COMMANDS};
use crate::error::Result;

const USAGE_WIDTH: usize = 36;

pub fn hello(_book: &mut AddressBook, _args: &Args, _ctx: &Context) -> Result<CmdResult> {
    Ok(CmdResult::default().with_message(CmdMessage::info("How can I help you?")))
}

pub fn help(_book: &mut AddressBook, _args: &Args, _ctx: &Context) -> Result<CmdResult> {
    let lines = COMMANDS
        .iter()
        .map(|spec| format!("{:<width$}{}", spec.usage, spec.about, width = USAGE_WIDTH))
        .collect();
    Ok(CmdResult::default().with_listing(lines))
}
