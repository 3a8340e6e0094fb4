//! This module defines general error types used throughout the crate.

use thiserror::Error;

/// Error type for move names that are not one of the twelve legal moves.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("`{0}` is not a legal move")]
pub struct InvalidMove(pub String);

/// Error type for malformed sticker configurations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidConfig {
    /// The configuration did not contain exactly 24 sticker labels.
    #[error("expected 24 sticker labels, found {0}")]
    WrongCount(usize),
    /// A sticker label was not a single printable ASCII character.
    #[error("sticker label {0:?} is not printable ascii")]
    BadLabel(char),
}
