//! Tally - Campaign-ledger chat bot engine
//!
//! This crate re-exports all layers of the Tally system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: tally_runtime    — REPL, CLI, store snapshots
//! Layer 2: tally_engine     — Executor, authorization, replies
//! Layer 1: tally_parser     — Vocabulary, lexer, query parser
//!          tally_store      — Campaign documents, store trait
//! Layer 0: tally_foundation — Core types (Value, Error)
//! ```

pub use tally_engine as engine;
pub use tally_foundation as foundation;
pub use tally_parser as parser;
pub use tally_runtime as runtime;
pub use tally_store as store;
