//! End-to-end tests for the Tally engine.
//!
//! Each test drives the full pipeline: raw query text in, reply payload
//! out, with an in-memory campaign store underneath.

mod level_up;
