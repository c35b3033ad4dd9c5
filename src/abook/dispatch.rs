//! # Dispatcher
//!
//! Maps the first word of an input line to a [`CommandSpec`] and runs it.
//!
//! The lookup table is built once from [`COMMANDS`] and rejects duplicate or
//! malformed command names up front, so a typo in the table fails at startup
//! rather than silently shadowing another command.
//!
//! This is also the single place where handler errors are recovered:
//!
//! | Error                         | Message                      | Level   |
//! |-------------------------------|------------------------------|---------|
//! | `BookError::InvalidData`      | `Invalid data.`              | error   |
//! | `BookError::ContactNotFound`  | `No contact with that name.` | warning |
//! | `BookError::InvalidCommand`   | `Invalid command.`           | error   |
//!
//! Anything else is returned to the caller unchanged.

use crate::book::AddressBook;
use crate::commands::{Action, Args, CmdMessage, CmdResult, CommandSpec, Context, COMMANDS};
use crate::error::{BookError, Result};
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Continue(CmdResult),
    Exit,
}

#[derive(Debug)]
pub struct Dispatcher {
    table: HashMap<&'static str, &'static CommandSpec>,
}

impl Dispatcher {
    pub fn new() -> Result<Self> {
        Self::from_specs(COMMANDS)
    }

    pub fn from_specs(specs: &'static [CommandSpec]) -> Result<Self> {
        let mut table = HashMap::new();
        for spec in specs {
            for name in std::iter::once(&spec.name).chain(spec.aliases) {
                validate_name(name)?;
                if table.insert(*name, spec).is_some() {
                    return Err(BookError::Registry(format!(
                        "command '{}' is registered twice",
                        name
                    )));
                }
            }
        }
        Ok(Self { table })
    }

    /// Runs one input line against the book.
    pub fn dispatch(
        &self,
        line: &str,
        book: &mut AddressBook,
        ctx: &Context<'_>,
    ) -> Result<Outcome> {
        let line = line.to_lowercase();
        let mut tokens = line.split_whitespace();
        let Some(word) = tokens.next() else {
            return Ok(Outcome::Continue(CmdResult::default()));
        };
        let args: Args = tokens.collect();
        debug!(command = word, args = args.len(), "dispatching");

        let Some(spec) = self.table.get(word) else {
            return recover(BookError::InvalidCommand(word.to_string())).map(Outcome::Continue);
        };

        match spec.action {
            Action::Exit => Ok(Outcome::Exit),
            Action::Run(handler) => match handler(book, &args, ctx) {
                Ok(result) => Ok(Outcome::Continue(result)),
                Err(e) => recover(e).map(Outcome::Continue),
            },
        }
    }
}

fn validate_name(name: &str) -> Result<()> {
    let well_formed = !name.is_empty() && name.chars().all(|c| c.is_ascii_lowercase() || c == '-');
    if well_formed {
        Ok(())
    } else {
        Err(BookError::Registry(format!("invalid command name '{}'", name)))
    }
}

fn recover(err: BookError) -> Result<CmdResult> {
    debug!(error = %err, "handler failed");
    let message = match err {
        BookError::InvalidData(_) => CmdMessage::error("Invalid data."),
        BookError::ContactNotFound(_) => CmdMessage::warning("No contact with that name."),
        BookError::InvalidCommand(_) => CmdMessage::error("Invalid command."),
        other => return Err(other),
    };
    Ok(CmdResult::default().with_message(message))
}
