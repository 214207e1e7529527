//! Invocation construction and validation.
//!
//! Applies the structural rules between command, aspect, and value before
//! dispatch. A structurally valid but type-mismatched modifier call is
//! rewritten to the `default` command so the chat surface answers
//! "I don't understand" instead of crashing; a value supplied to a
//! non-modifier command is an internal contract violation, unreachable
//! from the grammar.

use tally_foundation::{Error, Result, Value};

use crate::parser::ParsedQuery;
use crate::vocabulary::{Aspect, Command, CommandKind, Preposition, VocabularyRegistry};

/// A resolved, validated query ready for dispatch.
///
/// Holds non-owning references into the vocabulary registry; constructed
/// once per incoming message and consumed immediately by the executor.
#[derive(Clone, Debug)]
pub struct Invocation<'v> {
    /// The command to execute.
    pub command: &'v Command,
    /// The aspect the command targets, if any.
    pub aspect: Option<&'v Aspect>,
    /// The scalar argument, if any.
    pub value: Option<Value>,
    /// The connective that introduced the aspect; carried for
    /// traceability only, never gates execution.
    pub preposition: Option<&'v Preposition>,
    /// Who issued the query.
    pub caller: String,
}

impl<'v> Invocation<'v> {
    /// Builds a validated invocation from parsed query parts.
    ///
    /// A modifier command whose value does not match its (non-singleton)
    /// aspect's type is downgraded to `default`. Singleton aspects are
    /// never type-checked.
    ///
    /// # Errors
    ///
    /// Returns an internal error if a non-modifier command other than
    /// `default` arrives with a value, or if no `default` command is
    /// registered when a downgrade is needed.
    pub fn build(
        parsed: ParsedQuery<'v>,
        vocabulary: &'v VocabularyRegistry,
        caller: impl Into<String>,
    ) -> Result<Self> {
        let ParsedQuery {
            mut command,
            aspect,
            value,
            preposition,
        } = parsed;

        if command.is_modifier {
            if let Some(aspect) = aspect {
                if !aspect.singleton && !value_matches(aspect, value.as_ref()) {
                    command = vocabulary
                        .default_command()
                        .ok_or_else(|| Error::internal("no default command registered"))?;
                }
            }
        } else if command.kind != CommandKind::Default && value.is_some() {
            return Err(Error::internal(format!(
                "command `{}` does not take a value",
                command.name
            )));
        }

        Ok(Self {
            command,
            aspect,
            value,
            preposition,
            caller: caller.into(),
        })
    }
}

/// True when the value is present and its runtime type equals the
/// aspect's declared type. An aspect with no value type accepts no value.
fn value_matches(aspect: &Aspect, value: Option<&Value>) -> bool {
    match (aspect.value_type, value) {
        (Some(expected), Some(value)) => value.value_type() == expected,
        _ => false,
    }
}
