//! Command execution.
//!
//! Dispatches validated invocations to their behaviors: authorization and
//! singleton checks run as explicit validation steps before a behavior,
//! then the executor matches exhaustively on the closed command set.
//! Each invocation runs the strict sequential pipeline
//! lex → parse → validate → execute; the only I/O is the store round-trip.

use tracing::{info, warn};

use tally_foundation::{Error, ErrorKind, Result, Value};
use tally_parser::{
    CommandKind, Invocation, ParseError, QueryParser, VocabularyRegistry, standard_vocabulary,
};
use tally_store::{CampaignField, CampaignStore};

use crate::reply::Reply;

/// The query evaluation engine: a compiled parser plus a store handle.
///
/// The store is injected at construction time; its lifecycle belongs to
/// the surrounding transport layer.
pub struct Engine<S: CampaignStore> {
    parser: QueryParser,
    store: S,
}

impl<S: CampaignStore> Engine<S> {
    /// Creates an engine with the standard vocabulary.
    ///
    /// # Errors
    ///
    /// Returns an error if the vocabulary fails to compile.
    pub fn new(store: S) -> Result<Self> {
        Self::with_vocabulary(standard_vocabulary(), store)
    }

    /// Creates an engine with a caller-supplied vocabulary.
    ///
    /// # Errors
    ///
    /// Returns an error if the vocabulary fails to compile.
    pub fn with_vocabulary(vocabulary: VocabularyRegistry, store: S) -> Result<Self> {
        Ok(Self {
            parser: QueryParser::new(vocabulary)?,
            store,
        })
    }

    /// Gets a reference to the store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Gets a mutable reference to the store.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Gets a reference to the query parser.
    #[must_use]
    pub const fn parser(&self) -> &QueryParser {
        &self.parser
    }

    /// Evaluates one query from a caller and produces a reply.
    ///
    /// The query may be empty (it resolves to the default command); the
    /// caller identifier must not be.
    ///
    /// # Errors
    ///
    /// Only a syntax error, a missing caller identifier, or an internal
    /// contract violation escape as errors; every other path — bad
    /// types, missing privileges, store trouble — produces a
    /// best-effort reply so the chat surface never goes silent.
    pub fn evaluate(&mut self, query: &str, caller: &str) -> Result<Reply> {
        if caller.trim().is_empty() {
            return Err(Error::missing_caller());
        }

        let Self { parser, store } = self;
        let parsed = parser.parse(query).map_err(|e| match e {
            // A lexed keyword missing from the registry means the
            // vocabulary changed under a stale pattern, not bad input.
            ParseError::UnknownWord(_) => Error::internal(e.to_string()),
            _ => Error::syntax(e.to_string()),
        })?;
        let invocation = Invocation::build(parsed, parser.vocabulary(), caller)?;
        info!(
            caller,
            command = %invocation.command.name,
            aspect = invocation.aspect.map(|a| a.name.as_str()),
            "dispatching query"
        );

        match execute(store, parser.vocabulary(), &invocation) {
            Ok(reply) => Ok(reply),
            Err(e) if matches!(e.kind, ErrorKind::Internal(_)) => Err(e),
            Err(e) => {
                warn!(error = %e, "execution failed");
                Ok(Reply::private(format!(
                    "Sorry, I had trouble with that: {e}."
                )))
            }
        }
    }
}

/// Which way a modifier command moves an aspect.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Adjustment {
    Add,
    Remove,
}

fn execute<S: CampaignStore>(
    store: &mut S,
    vocabulary: &VocabularyRegistry,
    invocation: &Invocation<'_>,
) -> Result<Reply> {
    match invocation.command.kind {
        CommandKind::Default => Ok(default_reply(invocation)),
        CommandKind::Help => Ok(help_reply(vocabulary)),
        CommandKind::Current => current(&*store, invocation),
        CommandKind::Add => modify(store, invocation, Adjustment::Add),
        CommandKind::Remove => modify(store, invocation, Adjustment::Remove),
        CommandKind::Set => set_aspect(store, invocation),
        CommandKind::SwitchCampaign => switch_campaign(store, invocation),
    }
}

/// Validation step: only the active campaign's game master may run
/// modifier commands. Returns the short-circuit reply on rejection.
fn authorize<S: CampaignStore>(
    store: &S,
    invocation: &Invocation<'_>,
) -> Result<Option<Reply>> {
    let game_master = store.game_master()?;
    if invocation.caller == game_master {
        Ok(None)
    } else {
        warn!(
            caller = %invocation.caller,
            command = %invocation.command.name,
            "unauthorized modifier command"
        );
        Ok(Some(Reply::broadcast("Nice try...")))
    }
}

/// Validation step: singleton aspects cannot be incremented or
/// decremented. Returns the short-circuit reply on rejection.
fn reject_singleton(invocation: &Invocation<'_>) -> Option<Reply> {
    let aspect = invocation.aspect?;
    if aspect.singleton {
        Some(Reply::broadcast(format!(
            "{} is a singleton aspect, you can't call `{}` on it.",
            aspect.name, invocation.command.name
        )))
    } else {
        None
    }
}

fn default_reply(invocation: &Invocation<'_>) -> Reply {
    info!(caller = %invocation.caller, "default response triggered");
    Reply::private("I'm sorry, I don't understand.")
}

/// Generates help from the registry: one line per command (the default
/// command keeps quiet about itself), then the tracked aspects.
fn help_reply(vocabulary: &VocabularyRegistry) -> Reply {
    let mut text = String::new();
    for command in vocabulary.commands() {
        if command.kind != CommandKind::Default {
            text.push_str(&command.help());
            text.push('\n');
        }
    }
    let aspects: Vec<&str> = vocabulary.aspects().map(|a| a.name.as_str()).collect();
    text.push_str(&format!(
        "\nI am also tracking the following aspects: {}",
        aspects.join(", ")
    ));
    Reply::private(text)
}

fn current<S: CampaignStore>(store: &S, invocation: &Invocation<'_>) -> Result<Reply> {
    let Some(aspect) = invocation.aspect else {
        return Ok(default_reply(invocation));
    };
    let campaign = store.active()?;
    let value = campaign.value_of(aspect.field);
    Ok(Reply::broadcast(format!(
        "{} is currently {value}",
        aspect.name
    )))
}

fn modify<S: CampaignStore>(
    store: &mut S,
    invocation: &Invocation<'_>,
    adjustment: Adjustment,
) -> Result<Reply> {
    if let Some(reply) = authorize(store, invocation)? {
        return Ok(reply);
    }
    if let Some(reply) = reject_singleton(invocation) {
        return Ok(reply);
    }
    let Some(aspect) = invocation.aspect else {
        return Ok(default_reply(invocation));
    };
    let Some(amount) = invocation.value.as_ref().and_then(Value::as_int) else {
        return Ok(default_reply(invocation));
    };

    let delta = match adjustment {
        Adjustment::Add => amount,
        Adjustment::Remove => -amount,
    };
    let mut campaign = store.active()?;
    let new_value = campaign.apply_delta(aspect.field, delta)?;

    // The level-up rule fires for xp only, and only on add. The xp
    // increment and the level bump land in one store write.
    if adjustment == Adjustment::Add
        && aspect.field == CampaignField::Xp
        && new_value >= campaign.party.xp_for_level_up
    {
        campaign.party.level += 1;
        let level = campaign.party.level;
        store.update(&campaign)?;
        info!(xp = new_value, level, "party leveled up");
        return Ok(Reply::broadcast(format!(
            "Updated xp to {new_value}. The party leveled up! :tada: You're now level {level}!"
        )));
    }

    store.update(&campaign)?;
    info!(aspect = %aspect.name, new_value, "aspect adjusted");
    let verb = match adjustment {
        Adjustment::Add => "Updated",
        Adjustment::Remove => "Reduced",
    };
    Ok(Reply::broadcast(format!(
        "{verb} {} to {new_value}",
        aspect.name
    )))
}

fn set_aspect<S: CampaignStore>(store: &mut S, invocation: &Invocation<'_>) -> Result<Reply> {
    if let Some(reply) = authorize(store, invocation)? {
        return Ok(reply);
    }
    let Some(aspect) = invocation.aspect else {
        return Ok(default_reply(invocation));
    };
    let Some(value) = invocation.value.as_ref() else {
        return Ok(default_reply(invocation));
    };

    let mut campaign = store.active()?;
    campaign.set_value(aspect.field, value)?;
    store.update(&campaign)?;
    info!(aspect = %aspect.name, %value, "aspect set");
    Ok(Reply::broadcast(format!("Set {} to {value}", aspect.name)))
}

fn switch_campaign<S: CampaignStore>(
    store: &mut S,
    invocation: &Invocation<'_>,
) -> Result<Reply> {
    let Some(name) = invocation.value.as_ref().and_then(Value::as_text) else {
        return Ok(default_reply(invocation));
    };

    let found = match store.find_by_name(name) {
        Ok(found) => found,
        Err(e) => {
            warn!(campaign = name, error = %e, "campaign lookup failed");
            return Ok(Reply::broadcast(format!(
                "Error finding campaign: `{name}`, make sure case is correct."
            )));
        }
    };
    store.set_active(found.id)?;
    info!(campaign = name, "current campaign set");
    Ok(Reply::broadcast(format!("Current campaign set to {name}")))
}
