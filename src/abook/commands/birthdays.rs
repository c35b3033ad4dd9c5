use crate::book::AddressBook;
use crate::commands::{Args, CmdResult, Context};
use crate::error::Result;
use tracing::debug;

/// `birthdays`: who to congratulate within the configured window.
pub fn run(book: &mut AddressBook, _args: &Args, ctx: &Context) -> Result<CmdResult> {
    let days = ctx.config.upcoming_days;
    debug!(today = %ctx.today, days, "collecting upcoming birthdays");
    let lines = book.get_upcoming_birthdays(ctx.today, days);
    Ok(CmdResult::default().with_listing(lines))
}
