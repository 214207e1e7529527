//! Lexer tests.
//!
//! Tests for composite pattern compilation, keyword precedence, and the
//! anchored, lazy token stream.

use tally_foundation::ValueType;
use tally_parser::lexer::{Lexer, Token, TokenKind};
use tally_parser::standard_vocabulary;
use tally_parser::vocabulary::{
    Aspect, Command, CommandKind, Preposition, PrepositionKind, VocabularyRegistry,
};
use tally_store::CampaignField;

fn standard_lexer() -> Lexer {
    Lexer::compile(&standard_vocabulary()).unwrap()
}

fn lex(lexer: &Lexer, input: &str) -> Vec<Token> {
    lexer.tokens(input).collect()
}

#[test]
fn command_wins_over_aspect_for_ambiguous_words() {
    // "level" registered as both a command and an aspect must lex as a
    // command: the grammar's first token is required to be one.
    let mut vocab = VocabularyRegistry::new();
    vocab.register_command(Command::new("level", "", CommandKind::Current));
    vocab.register_aspect(
        Aspect::new("level", "", CampaignField::Xp).with_value_type(ValueType::Int),
    );
    let lexer = Lexer::compile(&vocab).unwrap();

    let tokens = lex(&lexer, "level level");
    assert_eq!(tokens[0].kind, TokenKind::Command);
    assert_eq!(tokens[1].kind, TokenKind::Command);
}

#[test]
fn aspect_wins_over_preposition() {
    let mut vocab = VocabularyRegistry::new();
    vocab.register_aspect(Aspect::new("to", "", CampaignField::Gold));
    vocab.register_preposition(Preposition::new("to", PrepositionKind::Directional));
    let lexer = Lexer::compile(&vocab).unwrap();

    assert_eq!(lex(&lexer, "to")[0].kind, TokenKind::Aspect);
}

#[test]
fn longer_command_name_wins_over_shared_prefix() {
    let mut vocab = VocabularyRegistry::new();
    vocab.register_command(Command::new("add", "", CommandKind::Add).modifier());
    vocab.register_command(Command::new("add loot", "", CommandKind::Add).modifier());
    let lexer = Lexer::compile(&vocab).unwrap();

    let tokens = lex(&lexer, "add loot");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].text, "add loot");
}

#[test]
fn whitespace_is_filtered() {
    let lexer = standard_lexer();
    let tokens = lex(&lexer, "  add \t xp \n 100  ");
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Command, TokenKind::Aspect, TokenKind::Integer]
    );
}

#[test]
fn stream_ends_at_first_unrecognized_span() {
    let lexer = standard_lexer();
    // "please" is not vocabulary; nothing after it is yielded even
    // though "xp" alone would match.
    let tokens = lex(&lexer, "add please xp 100");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Command);
}

#[test]
fn quoted_string_swallows_keywords_and_spaces() {
    let lexer = standard_lexer();
    let tokens = lex(&lexer, "set campaign \"add xp to gold\"");
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[2].kind, TokenKind::Quoted);
    assert_eq!(tokens[2].text, "\"add xp to gold\"");
}

#[test]
fn adjacent_quoted_strings_match_non_greedily() {
    let lexer = standard_lexer();
    let tokens = lex(&lexer, "set campaign \"a\" \"b\"");
    assert_eq!(tokens[2].text, "\"a\"");
    assert_eq!(tokens[3].text, "\"b\"");
}

#[test]
fn integer_sign_is_part_of_the_token() {
    let lexer = standard_lexer();
    let tokens = lex(&lexer, "remove xp -25");
    assert_eq!(tokens[2].kind, TokenKind::Integer);
    assert_eq!(tokens[2].text, "-25");
}

#[test]
fn stream_is_not_restartable() {
    let lexer = standard_lexer();
    let mut stream = lexer.tokens("add xp 100");
    assert!(stream.next().is_some());
    assert!(stream.next().is_some());
    assert!(stream.next().is_some());
    // Exhausted; only re-lexing the text starts over.
    assert!(stream.next().is_none());
    assert!(stream.next().is_none());
}

#[test]
fn mixed_case_keywords_lex() {
    let lexer = standard_lexer();
    let tokens = lex(&lexer, "Switch Campaign To \"Crown of Ash\"");
    assert_eq!(tokens[0].kind, TokenKind::Command);
    assert_eq!(tokens[0].text, "Switch Campaign To");
}
