//! Vocabulary registry tests.
//!
//! Tests for registering and looking up vocabulary definitions.

use tally_foundation::ValueType;
use tally_parser::standard_vocabulary;
use tally_parser::vocabulary::{
    Aspect, Command, CommandKind, Preposition, PrepositionKind, VocabularyRegistry,
};
use tally_store::CampaignField;

#[test]
fn register_and_lookup_command() {
    let mut vocab = VocabularyRegistry::new();
    vocab.register_command(Command::new("foo", "does foo stuff", CommandKind::Current));

    let found = vocab.command("foo").unwrap();
    assert_eq!(found.name, "foo");
    assert_eq!(found.help_info, "does foo stuff");
    assert!(!found.is_modifier);
}

#[test]
fn lookup_unregistered_word_is_none() {
    let vocab = VocabularyRegistry::new();
    // Unresolved names are valid dead ends, not errors.
    assert!(vocab.command("frobnicate").is_none());
    assert!(vocab.aspect("frobnicate").is_none());
    assert!(vocab.preposition("frobnicate").is_none());
}

#[test]
fn lookup_matches_lexer_case_insensitivity() {
    let mut vocab = VocabularyRegistry::new();
    vocab.register_aspect(
        Aspect::new("bar", "a bar aspect", CampaignField::Gold).with_value_type(ValueType::Int),
    );

    assert!(vocab.aspect("BAR").is_some());
    assert!(vocab.aspect("Bar").is_some());
}

#[test]
fn register_and_lookup_preposition() {
    let mut vocab = VocabularyRegistry::new();
    vocab.register_preposition(Preposition::new("onto", PrepositionKind::Directional));

    let found = vocab.preposition("onto").unwrap();
    assert_eq!(found.kind, PrepositionKind::Directional);
}

#[test]
fn command_help_line_format() {
    let command = Command::new("help", "retrieves help info", CommandKind::Help);
    assert_eq!(command.help(), "`help`: retrieves help info.");
}

#[test]
fn aspect_help_line_format() {
    let aspect = Aspect::new("foo", "a foo aspect", CampaignField::Gold);
    assert_eq!(aspect.help(), "`foo`: a foo aspect.");
}

#[test]
fn standard_vocabulary_covers_the_command_set() {
    let vocab = standard_vocabulary();
    for name in ["default", "help", "add", "remove", "set", "current", "switch campaign to"] {
        assert!(vocab.command(name).is_some(), "missing command {name}");
    }
    for name in ["xp", "gold", "party_size", "xp_target", "campaign"] {
        assert!(vocab.aspect(name).is_some(), "missing aspect {name}");
    }
    for name in ["to", "into", "onto", "from"] {
        assert!(vocab.preposition(name).is_some(), "missing preposition {name}");
    }
}
