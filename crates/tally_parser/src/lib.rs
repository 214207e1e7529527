//! Query parser for the Tally campaign-ledger bot.
//!
//! This crate turns free text like "add 1000 to xp" or
//! `switch campaign to "Rise of Tiamat"` into validated invocations the
//! executor can dispatch.
//!
//! # Architecture
//!
//! ```text
//! "add 1000 to xp"
//!        │
//!        ▼
//! ┌─────────────────┐
//! │     LEXER       │  → [Command("add"), Integer("1000"),
//! └─────────────────┘     Preposition("to"), Aspect("xp")]
//!        │                  (pattern compiled from the vocabulary)
//!        ▼
//! ┌─────────────────┐
//! │     PARSER      │  → command=add, value=1000, preposition=to,
//! └─────────────────┘     aspect=xp   (one-token lookahead)
//!        │
//!        ▼
//! ┌─────────────────┐
//! │   INVOCATION    │  → validated Invocation, or a downgrade to
//! │   VALIDATOR     │     `default` for malformed modifier calls
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`vocabulary`] - Runtime storage for vocabulary definitions
//! - [`lexer`] - Composite pattern compilation and token streams
//! - [`parser`] - Recursive-descent query evaluation
//! - [`invocation`] - Invocation construction and validation
//! - [`stdlib`] - The standard campaign-ledger vocabulary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod invocation;
pub mod lexer;
pub mod parser;
pub mod stdlib;
pub mod vocabulary;

// Re-export main types for convenience
pub use invocation::Invocation;
pub use lexer::{Lexer, Token, TokenKind, TokenStream};
pub use parser::{ParseError, ParsedQuery, QueryParser};
pub use stdlib::standard_vocabulary;
pub use vocabulary::{
    Aspect, Command, CommandKind, Preposition, PrepositionKind, VocabularyRegistry,
};
