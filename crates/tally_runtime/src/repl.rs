//! The interactive REPL.
//!
//! Drives the engine from a local terminal, standing in for the chat
//! transport: each line is one query, evaluated under a fixed caller
//! identity.

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use tally_engine::{Engine, Reply, Visibility};
use tally_foundation::{Error, Result};
use tally_store::MemoryStore;

/// The interactive REPL.
pub struct Repl {
    /// The line editor for input.
    editor: DefaultEditor,

    /// The engine under the prompt.
    engine: Engine<MemoryStore>,

    /// Caller identity attached to every query.
    caller: String,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Prompt text.
    prompt: String,
}

impl Repl {
    /// Creates a REPL around an engine, issuing queries as `caller`.
    ///
    /// # Errors
    ///
    /// Returns an error if the line editor fails to initialize.
    pub fn new(engine: Engine<MemoryStore>, caller: impl Into<String>) -> Result<Self> {
        let editor = DefaultEditor::new().map_err(|e| Error::io(e.to_string()))?;
        Ok(Self {
            editor,
            engine,
            caller: caller.into(),
            show_banner: true,
            prompt: "tally> ".to_string(),
        })
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Returns a reference to the engine.
    #[must_use]
    pub const fn engine(&self) -> &Engine<MemoryStore> {
        &self.engine
    }

    /// Returns a mutable reference to the engine.
    pub fn engine_mut(&mut self) -> &mut Engine<MemoryStore> {
        &mut self.engine
    }

    /// Runs the REPL loop until EOF.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally; per-query
    /// failures are printed and the loop continues.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            match self.editor.readline(&self.prompt) {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    let _ = self.editor.add_history_entry(&line);
                    match self.engine.evaluate(trimmed, &self.caller) {
                        Ok(reply) => print_reply(&reply),
                        Err(e) => eprintln!("\x1b[31mError: {e}\x1b[0m"),
                    }
                }
                Err(ReadlineError::Interrupted) => {}
                Err(ReadlineError::Eof) => break,
                Err(e) => return Err(Error::io(e.to_string())),
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    fn print_banner(&self) {
        println!("Tally {} - campaign ledger", env!("CARGO_PKG_VERSION"));
        println!("Speaking as '{}'. Try `help`, or Ctrl+D to exit.", self.caller);
    }
}

fn print_reply(reply: &Reply) {
    match reply.visibility {
        Visibility::Broadcast => println!("{}", reply.text),
        Visibility::Private => println!("(only you) {}", reply.text),
    }
}
