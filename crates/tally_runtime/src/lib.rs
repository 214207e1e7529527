//! REPL, CLI, and store snapshots for the Tally campaign bot.
//!
//! # Modules
//!
//! - [`repl`] - Interactive read-eval-print loop over the engine
//! - [`serialize`] - `MessagePack` snapshots of the in-memory store

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod repl;
pub mod serialize;

pub use repl::Repl;
