//! Standard vocabulary for the campaign ledger.
//!
//! The fixed configuration the bot ships with: commands, aspects, and
//! prepositions registered once at process start. Runtime additions go
//! through [`VocabularyRegistry`] followed by an explicit recompile.

use tally_foundation::ValueType;
use tally_store::CampaignField;

use crate::vocabulary::{
    Aspect, Command, CommandKind, Preposition, PrepositionKind, VocabularyRegistry,
};

/// Builds the standard vocabulary.
#[must_use]
pub fn standard_vocabulary() -> VocabularyRegistry {
    let mut vocabulary = VocabularyRegistry::new();

    vocabulary.register_command(Command::new("default", "", CommandKind::Default));
    vocabulary.register_command(Command::new(
        "help",
        "retrieves help info",
        CommandKind::Help,
    ));
    vocabulary.register_command(
        Command::new("add", "adds a given value to a given aspect", CommandKind::Add).modifier(),
    );
    vocabulary.register_command(Command::new(
        "current",
        "retrieves the current value of a given aspect",
        CommandKind::Current,
    ));
    vocabulary.register_command(
        Command::new(
            "remove",
            "removes a given value from a given aspect",
            CommandKind::Remove,
        )
        .modifier(),
    );
    vocabulary.register_command(
        Command::new("set", "sets a given aspect to a given value", CommandKind::Set).modifier(),
    );
    vocabulary.register_command(
        Command::new(
            "switch campaign to",
            "switches the current campaign",
            CommandKind::SwitchCampaign,
        )
        .modifier(),
    );

    vocabulary.register_aspect(
        Aspect::new("xp", "experience points", CampaignField::Xp).with_value_type(ValueType::Int),
    );
    vocabulary.register_aspect(
        Aspect::new("gold", "currency quantity", CampaignField::Gold)
            .with_value_type(ValueType::Int),
    );
    vocabulary.register_aspect(
        Aspect::new(
            "party_size",
            "number of party members",
            CampaignField::PartySize,
        )
        .with_value_type(ValueType::Int),
    );
    vocabulary.register_aspect(
        Aspect::new(
            "xp_target",
            "experience points needed to level up",
            CampaignField::XpTarget,
        )
        .with_value_type(ValueType::Int),
    );
    vocabulary
        .register_aspect(Aspect::new("campaign", "the active campaign", CampaignField::CampaignName).singleton());

    vocabulary.register_preposition(Preposition::new("to", PrepositionKind::Directional));
    vocabulary.register_preposition(Preposition::new("into", PrepositionKind::Directional));
    vocabulary.register_preposition(Preposition::new("onto", PrepositionKind::Directional));
    vocabulary.register_preposition(Preposition::new("from", PrepositionKind::Other));

    vocabulary
}
