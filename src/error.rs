//! Bridging `Validated` into `Result`
//!
//! At the edge of a program a failed validation often has to travel through
//! `?` alongside other errors. `ValidationError` carries the accumulated
//! messages as a regular `std::error::Error`.
//!
//! # Examples
//!
//! ```
//! use validated::{Validated, ValidationError};
//!
//! fn parse_port(raw: &str) -> Result<u16, ValidationError> {
//!     Validated::from_result(raw.parse::<u16>())
//!         .and_then(|port| Validated::validate(port, |p| *p >= 1024, "port is privileged"))
//!         .into_result()
//! }
//!
//! assert_eq!(parse_port("8080").unwrap(), 8080);
//! let err = parse_port("80").unwrap_err();
//! assert_eq!(err.to_string(), "validation failed:\n  - port is privileged");
//! ```

use std::error::Error as StdError;
use std::fmt;

use crate::nonempty::Messages;
use crate::Validated;

/// The messages of a failed validation, as an error value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    messages: Messages,
}

impl ValidationError {
    /// Wrap a list of messages.
    pub fn new(messages: Messages) -> Self {
        Self { messages }
    }

    /// The accumulated messages, in the order they were produced.
    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Consume the error, returning its messages.
    pub fn into_messages(self) -> Messages {
        self.messages
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed:")?;
        for message in &self.messages {
            write!(f, "\n  - {}", message)?;
        }
        Ok(())
    }
}

impl StdError for ValidationError {}

impl From<ValidationError> for Messages {
    fn from(err: ValidationError) -> Self {
        err.messages
    }
}

impl<A> Validated<A> {
    /// Convert into a `Result`, turning the messages of an `Invalid` into a
    /// [`ValidationError`].
    pub fn into_result(self) -> Result<A, ValidationError> {
        self.fold(|messages| Err(ValidationError::new(messages)), Ok)
    }
}

impl<A> From<Validated<A>> for Result<A, ValidationError> {
    fn from(validated: Validated<A>) -> Self {
        validated.into_result()
    }
}

impl<A> From<Result<A, ValidationError>> for Validated<A> {
    fn from(result: Result<A, ValidationError>) -> Self {
        match result {
            Ok(value) => Validated::Valid(value),
            Err(err) => Validated::Invalid(err.into_messages()),
        }
    }
}
