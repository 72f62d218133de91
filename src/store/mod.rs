//! CarStore - the garage tracker core.
//!
//! An ordered, newest-first list of car records with validation on insert,
//! derived filtered views, and a JSON snapshot persisted through a
//! `StorageBackend` after every mutating operation.

mod car_store;
mod draft;
mod snapshot;

use std::fmt;

use chrono::{Datelike, Utc};

use crate::storage::StorageError;

/// A rejected add attempt. `Display` is the user-visible message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was empty after trimming, or the year field of the
    /// draft was not a number.
    MissingFields,
    /// The year fell outside the accepted range.
    YearOutOfRange { max: i32 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingFields => {
                write!(f, "Please fill in Brand, Model, Year, and Color.")
            }
            ValidationError::YearOutOfRange { max } => {
                write!(f, "Year must be between 1950 and {}.", max)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Error type for store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The add input was rejected; the list was left untouched.
    Validation(ValidationError),
    /// The storage backend failed.
    Storage(StorageError),
    /// The snapshot could not be encoded.
    Serde(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Validation(err) => write!(f, "{}", err),
            StoreError::Storage(err) => write!(f, "snapshot persistence failed: {}", err),
            StoreError::Serde(msg) => write!(f, "snapshot encoding failed: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<StorageError> for StoreError {
    fn from(err: StorageError) -> Self {
        StoreError::Storage(err)
    }
}

/// The current calendar year (UTC), used for the add bound and draft reset.
pub(crate) fn current_year() -> i32 {
    Utc::now().year()
}

pub use car_store::{CarStore, STORAGE_KEY};
pub use draft::CarDraft;
