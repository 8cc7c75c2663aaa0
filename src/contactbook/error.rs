use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("Contact not found: {0}")]
    NotFound(String),

    #[error("Contact already exists: {0}")]
    DuplicateContact(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Insufficient input: {0}")]
    InsufficientInput(String),

    #[error("Command not recognized: {0}")]
    UnknownCommand(String),

    #[error("Page not found: {page} (book has {pages} page(s))")]
    PageNotFound { page: usize, pages: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ContactError>;
