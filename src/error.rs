//! # Error Handling
//!
//! This module defines the centralized error handling mechanism for the
//! `biblio` application. It uses the `thiserror` library to create an
//! `Error` enum covering every anticipated failure mode of the catalog
//! and its interactive front end.
//!
//! All catalog failures are recoverable: the interactive loop catches them
//! per user action, renders a message, and continues. Operations fail
//! immediately and leave the catalog unchanged on failure — there is no
//! partial mutation to roll back.

use thiserror::Error;

/// Main error type for catalog operations
#[derive(Error, Debug)]
pub enum Error {
    /// An insertion used an ISBN that is already present in the catalog.
    #[error("element with ISBN {isbn} already exists in the catalog")]
    DuplicateIsbn { isbn: String },

    /// A lookup, removal, or update named an ISBN with no catalog entry.
    #[error("element with ISBN {isbn} not found")]
    NotFound { isbn: String },

    /// User input could not be interpreted: non-numeric text where a number
    /// was expected, an out-of-range menu selection, or an unknown element
    /// type during an update.
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// Input ended in the middle of a multi-field prompt.
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
