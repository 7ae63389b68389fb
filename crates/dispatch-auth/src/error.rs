use thiserror::Error;

/// The first registration rule a set of credentials failed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("username must contain an underscore and be no more than five characters long")]
    MalformedUsername,

    #[error("password must be at least eight characters and contain a capital letter, a number, and a special character")]
    WeakPassword,

    #[error("cell phone number must use the international format +27 followed by nine digits")]
    MalformedCellNumber,
}
