//! Core types for the Tally campaign-ledger bot.
//!
//! This crate provides:
//! - [`Value`] - The scalar value type carried by parsed queries
//! - [`ValueType`] - Type descriptors for aspect value validation
//! - [`Error`] - Shared error type with categorized kinds
//! - [`Result`] - Crate-wide result alias

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod value;

pub use error::{Error, ErrorKind, Result};
pub use value::{Value, ValueType};
