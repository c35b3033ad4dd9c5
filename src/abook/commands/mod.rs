//! # Command Layer
//!
//! One module per REPL command. Every handler has the same shape ([`Handler`]):
//! it takes the address book, the argument tokens that followed the command word,
//! and a [`Context`], and returns a [`CmdResult`].
//!
//! Handlers never print. Validation problems (a bad phone, an unknown phone to
//! edit) become warning messages in the result; only the three recoverable
//! [`BookError`] kinds are returned as errors, and those are turned into
//! messages by the dispatcher.
//!
//! [`COMMANDS`] is the fixed command table. The dispatcher indexes it at startup.

use crate::book::AddressBook;
use crate::config::AppConfig;
use crate::error::{BookError, Result};
use crate::record::RecordError;
use chrono::{Local, NaiveDate};
use std::fmt;

pub mod add;
pub mod all;
pub mod birthday;
pub mod birthdays;
pub mod change;
pub mod help;
pub mod phone;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CmdResult {
    /// Multi-line output, printed before any messages.
    pub listing: Vec<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listing(mut self, lines: Vec<String>) -> Self {
        self.listing = lines;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.listing.is_empty() && self.messages.is_empty()
    }
}

/// Turns a record operation outcome into a success or warning message.
pub(crate) fn record_message<T>(
    outcome: std::result::Result<T, RecordError>,
    on_success: impl FnOnce(T) -> String,
) -> CmdMessage {
    match outcome {
        Ok(value) => CmdMessage::success(on_success(value)),
        Err(e) => CmdMessage::warning(e.to_string()),
    }
}

/// Tokens following the command word.
#[derive(Debug, Clone, Default)]
pub struct Args {
    tokens: Vec<String>,
}

impl Args {
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    /// The token at `index`, or `InvalidData` when the user supplied too few.
    pub fn get(&self, index: usize) -> Result<&str> {
        self.tokens
            .get(index)
            .map(String::as_str)
            .ok_or(BookError::InvalidData(index))
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Args {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// Per-invocation state handed to every handler.
#[derive(Debug, Clone)]
pub struct Context<'a> {
    pub config: &'a AppConfig,
    pub today: NaiveDate,
}

impl<'a> Context<'a> {
    pub fn new(config: &'a AppConfig) -> Self {
        Self {
            config,
            today: Local::now().date_naive(),
        }
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }
}

pub type Handler = fn(&mut AddressBook, &Args, &Context<'_>) -> Result<CmdResult>;

#[derive(Clone, Copy)]
pub enum Action {
    Run(Handler),
    Exit,
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Run(_) => f.write_str("Run(..)"),
            Action::Exit => f.write_str("Exit"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub usage: &'static str,
    pub about: &'static str,
    pub action: Action,
}

pub static COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "hello",
        aliases: &[],
        usage: "hello",
        about: "Greet the assistant",
        action: Action::Run(help::hello),
    },
    CommandSpec {
        name: "add",
        aliases: &[],
        usage: "add <name> <phone>",
        about: "Add a phone to a contact, creating the contact if needed",
        action: Action::Run(add::run),
    },
    CommandSpec {
        name: "change",
        aliases: &[],
        usage: "change <name> <old> <new>",
        about: "Replace one of a contact's phones",
        action: Action::Run(change::run),
    },
    CommandSpec {
        name: "phone",
        aliases: &[],
        usage: "phone <name>",
        about: "Show a contact's phones",
        action: Action::Run(phone::run),
    },
    CommandSpec {
        name: "all",
        aliases: &[],
        usage: "all",
        about: "List every contact",
        action: Action::Run(all::run),
    },
    CommandSpec {
        name: "add-birthday",
        aliases: &[],
        usage: "add-birthday <name> <DD.MM.YYYY>",
        about: "Set a contact's birthday",
        action: Action::Run(birthday::add),
    },
    CommandSpec {
        name: "show-birthday",
        aliases: &[],
        usage: "show-birthday <name>",
        about: "Show a contact's birthday",
        action: Action::Run(birthday::show),
    },
    CommandSpec {
        name: "birthdays",
        aliases: &[],
        usage: "birthdays",
        about: "Birthdays in the coming week",
        action: Action::Run(birthdays::run),
    },
    CommandSpec {
        name: "help",
        aliases: &[],
        usage: "help",
        about: "Show this list",
        action: Action::Run(help::help),
    },
    CommandSpec {
        name: "exit",
        aliases: &["close"],
        usage: "exit | close",
        about: "Leave the assistant",
        action: Action::Exit,
    },
];
