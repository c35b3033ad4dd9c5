use super::print::write_result;
use abook::book::AddressBook;
use abook::commands::Context;
use abook::config::AppConfig;
use abook::dispatch::{Dispatcher, Outcome};
use abook::error::Result;
use std::io::{BufRead, Write};

const WELCOME: &str = "Welcome to the assistant bot!";
const GOODBYE: &str = "Good bye!";

/// Reads commands until `exit`/`close` or end of input.
pub(super) fn run<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    book: &mut AddressBook,
    dispatcher: &Dispatcher,
    config: &AppConfig,
) -> Result<()> {
    writeln!(output, "{}", WELCOME)?;
    let mut lines = input.lines();

    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            writeln!(output)?;
            break;
        };

        let ctx = Context::new(config);
        match dispatcher.dispatch(&line, book, &ctx)? {
            Outcome::Exit => break,
            Outcome::Continue(result) => write_result(output, &result)?,
        }
    }

    writeln!(output, "{}", GOODBYE)?;
    Ok(())
}
