use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookError {
    /// A command was invoked with fewer arguments than it needs.
    #[error("Missing argument at position {0}")]
    InvalidData(usize),

    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Command registry error: {0}")]
    Registry(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BookError>;
