//! # abook Architecture
//!
//! abook is an interactive address book: contact names, phone numbers and
//! birthdays, kept in memory for the lifetime of the process.
//!
//! Like any good CLI it is a library first. The binary only reads lines, hands
//! them to the [`dispatch::Dispatcher`] and prints what comes back.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Flags, logging setup, the read/print loop                │
//! │  - The ONLY place that knows about stdin/stdout/styling     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Dispatch Layer (dispatch.rs)                               │
//! │  - Tokenizes a line, looks up the command table             │
//! │  - Recovers the expected errors into messages               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One handler per command, returns a `CmdResult`           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model (book.rs, record.rs, fields.rs)                      │
//! │  - Validated fields, records, the address book itself       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`fields`]: `Name`, `Phone` and `Birthday` validators
//! - [`record`]: A single contact and its phone/birthday operations
//! - [`book`]: The address book and the upcoming-birthdays query
//! - [`commands`]: Handlers and the command table
//! - [`dispatch`]: Line tokenizing, command lookup, error recovery
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod book;
pub mod commands;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod fields;
pub mod record;
