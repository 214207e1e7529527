//! Vocabulary registry for query vocabulary definitions.
//!
//! Stores commands, aspects, and prepositions, all keyed by their literal
//! textual form. Lookups are case-insensitive and return `None` for
//! unregistered words; an unresolved name is a valid dead end during
//! parsing, not an error.

use std::collections::HashMap;

use tally_foundation::ValueType;
use tally_store::CampaignField;

/// The closed set of behaviors a command can dispatch to.
///
/// The executor matches on this exhaustively, so adding a command kind
/// fails to compile until every dispatch site handles it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandKind {
    /// The "I don't understand" fallback.
    Default,
    /// Generated help text.
    Help,
    /// Increment an aspect.
    Add,
    /// Decrement an aspect.
    Remove,
    /// Overwrite an aspect.
    Set,
    /// Read an aspect.
    Current,
    /// Repoint the active campaign.
    SwitchCampaign,
}

/// A registered command.
#[derive(Clone, Debug)]
pub struct Command {
    /// Literal name, possibly multi-word ("switch campaign to").
    pub name: String,
    /// Help text, shown by the help command.
    pub help_info: String,
    /// Which behavior this command dispatches to.
    pub kind: CommandKind,
    /// True if the command both requires and writes a value/aspect pair.
    pub is_modifier: bool,
}

impl Command {
    /// Creates a read-only command.
    #[must_use]
    pub fn new(name: impl Into<String>, help_info: impl Into<String>, kind: CommandKind) -> Self {
        Self {
            name: name.into(),
            help_info: help_info.into(),
            kind,
            is_modifier: false,
        }
    }

    /// Marks the command as a modifier (add/remove/set family).
    #[must_use]
    pub const fn modifier(mut self) -> Self {
        self.is_modifier = true;
        self
    }

    /// One help line for this command.
    #[must_use]
    pub fn help(&self) -> String {
        format!("`{}`: {}.", self.name, self.help_info)
    }
}

/// A registered aspect: a named, typed campaign attribute.
#[derive(Clone, Debug)]
pub struct Aspect {
    /// Literal name ("xp", "party_size", ...).
    pub name: String,
    /// Help text, shown by the help command.
    pub help_info: String,
    /// The campaign-record slot this aspect reads and writes.
    pub field: CampaignField,
    /// Scalar type a modifier value must have; `None` means the aspect
    /// carries no enforced scalar value.
    pub value_type: Option<ValueType>,
    /// True for aspects that can only be set, never incremented.
    pub singleton: bool,
}

impl Aspect {
    /// Creates an aspect with no value type.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        help_info: impl Into<String>,
        field: CampaignField,
    ) -> Self {
        Self {
            name: name.into(),
            help_info: help_info.into(),
            field,
            value_type: None,
            singleton: false,
        }
    }

    /// Sets the scalar type modifier values must match.
    #[must_use]
    pub const fn with_value_type(mut self, value_type: ValueType) -> Self {
        self.value_type = Some(value_type);
        self
    }

    /// Marks the aspect as a singleton.
    #[must_use]
    pub const fn singleton(mut self) -> Self {
        self.singleton = true;
        self
    }

    /// One help line for this aspect.
    #[must_use]
    pub fn help(&self) -> String {
        format!("`{}`: {}.", self.name, self.help_info)
    }
}

/// Semantic category of a preposition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrepositionKind {
    /// "to", "into", "onto".
    Directional,
    /// "before", "after".
    Time,
    /// "at", "in".
    Place,
    /// "under", "behind".
    Location,
    /// Everything else.
    Other,
}

/// A registered preposition.
///
/// Prepositions only enable the alternate phrasing
/// `<command> <value> <preposition> <aspect>`; they never gate execution.
#[derive(Clone, Debug)]
pub struct Preposition {
    /// Literal word.
    pub name: String,
    /// Semantic category.
    pub kind: PrepositionKind,
}

impl Preposition {
    /// Creates a preposition.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: PrepositionKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Runtime storage for all vocabulary definitions.
///
/// Definitions are kept in insertion order (help text and the lexer
/// pattern both want a stable iteration order) with a lowercased index
/// for case-insensitive lookup.
#[derive(Clone, Debug, Default)]
pub struct VocabularyRegistry {
    commands: Vec<Command>,
    command_index: HashMap<String, usize>,
    aspects: Vec<Aspect>,
    aspect_index: HashMap<String, usize>,
    prepositions: Vec<Preposition>,
    preposition_index: HashMap<String, usize>,
}

impl VocabularyRegistry {
    /// Creates a new empty vocabulary registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a command, replacing any previous one with the same name.
    pub fn register_command(&mut self, command: Command) {
        let key = command.name.to_lowercase();
        if let Some(&i) = self.command_index.get(&key) {
            self.commands[i] = command;
        } else {
            self.command_index.insert(key, self.commands.len());
            self.commands.push(command);
        }
    }

    /// Looks up a command by name.
    #[must_use]
    pub fn command(&self, name: &str) -> Option<&Command> {
        self.command_index
            .get(&name.to_lowercase())
            .map(|&i| &self.commands[i])
    }

    /// The registered `default` command, if any.
    #[must_use]
    pub fn default_command(&self) -> Option<&Command> {
        self.command("default")
    }

    /// All commands in registration order.
    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }

    /// Registers an aspect, replacing any previous one with the same name.
    pub fn register_aspect(&mut self, aspect: Aspect) {
        let key = aspect.name.to_lowercase();
        if let Some(&i) = self.aspect_index.get(&key) {
            self.aspects[i] = aspect;
        } else {
            self.aspect_index.insert(key, self.aspects.len());
            self.aspects.push(aspect);
        }
    }

    /// Looks up an aspect by name.
    #[must_use]
    pub fn aspect(&self, name: &str) -> Option<&Aspect> {
        self.aspect_index
            .get(&name.to_lowercase())
            .map(|&i| &self.aspects[i])
    }

    /// All aspects in registration order.
    pub fn aspects(&self) -> impl Iterator<Item = &Aspect> {
        self.aspects.iter()
    }

    /// Registers a preposition, replacing any previous one with the same name.
    pub fn register_preposition(&mut self, preposition: Preposition) {
        let key = preposition.name.to_lowercase();
        if let Some(&i) = self.preposition_index.get(&key) {
            self.prepositions[i] = preposition;
        } else {
            self.preposition_index.insert(key, self.prepositions.len());
            self.prepositions.push(preposition);
        }
    }

    /// Looks up a preposition by name.
    #[must_use]
    pub fn preposition(&self, name: &str) -> Option<&Preposition> {
        self.preposition_index
            .get(&name.to_lowercase())
            .map(|&i| &self.prepositions[i])
    }

    /// All prepositions in registration order.
    pub fn prepositions(&self) -> impl Iterator<Item = &Preposition> {
        self.prepositions.iter()
    }
}
