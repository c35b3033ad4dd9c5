use super::styles::ABOOK_THEME;
use abook::commands::CmdResult;
use std::io::{self, Write};

/// Writes listing lines first, then messages, each styled by level.
pub(super) fn write_result<W: Write>(out: &mut W, result: &CmdResult) -> io::Result<()> {
    for line in &result.listing {
        writeln!(out, "{}", ABOOK_THEME.listing.apply_to(line))?;
    }
    for message in &result.messages {
        writeln!(
            out,
            "{}",
            ABOOK_THEME.for_level(message.level).apply_to(&message.content)
        )?;
    }
    Ok(())
}
