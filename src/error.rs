//! Boundary validation errors.
//!
//! The engine's expected misses (unknown user, empty post text) are sentinel
//! return values, not errors. The only fallible surface is identity
//! validation where raw strings enter the system.

use thiserror::Error;

/// A raw string rejected by [`Username::parse`](crate::Username::parse).
#[derive(Debug, Error, Clone)]
#[error("username `{raw}` is invalid: {reason}")]
pub struct InvalidUsername {
    pub raw: String,
    pub reason: String,
}

/// Crate-level convenience error.
///
/// A thin wrapper over the canonical validation errors, so callers can hold
/// one type across the boundary.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    InvalidUsername(#[from] InvalidUsername),
}
