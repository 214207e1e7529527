//! Integration tests for the tally_parser crate.
//!
//! Tests for the query parsing pipeline:
//! - Vocabulary registration and lookup
//! - Tokenization and keyword precedence
//! - Recursive-descent grammar
//! - Invocation validation
//! - Property-based grammar guarantees

mod lexer_tests;
mod property_tests;
mod vocabulary_tests;
