use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error while talking to the terminal: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid command or argument. Please try again.")]
    InvalidInput,

    #[error("Invalid command.")]
    UnknownCommand(String),

    /// Wrong number of arguments; carries the handler's usage hint.
    #[error("{0}")]
    Arity(&'static str),

    #[error("Phone number must contain only digits.")]
    NotDigits,

    #[error("Invalid phone number. Please provide a valid phone number for the contact.")]
    InvalidPhone,

    #[error("Phone number must be exactly 10 digits.")]
    PhoneLength,

    #[error("Contact '{0}' not found.")]
    ContactNotFound(String),

    #[error("Contact not found.")]
    NoSuchContact,

    #[error("Contact with this name already exists.")]
    DuplicateContact,

    #[error("Phone number not found.")]
    PhoneNotFound,

    #[error("Invalid search pattern: {0}")]
    Pattern(#[from] regex::Error),
}
