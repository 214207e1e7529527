//! Command execution engine for the Tally campaign-ledger bot.
//!
//! Ties the parser and the campaign store together behind one entry
//! point: [`Engine::evaluate`] takes raw query text plus a caller
//! identifier and returns a [`Reply`] payload for the chat transport.
//!
//! # Modules
//!
//! - [`executor`] - Dispatch, authorization, and command behaviors
//! - [`reply`] - Reply payloads (broadcast vs private)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod executor;
pub mod reply;

pub use executor::Engine;
pub use reply::{Reply, Visibility};
