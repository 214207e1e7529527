//! Property-based grammar guarantees.
//!
//! These tests verify the parser's documented properties over generated
//! inputs rather than hand-picked examples.

use proptest::prelude::*;

use tally_foundation::Value;
use tally_parser::parser::QueryParser;
use tally_parser::standard_vocabulary;
use tally_parser::vocabulary::CommandKind;

fn parser() -> QueryParser {
    QueryParser::new(standard_vocabulary()).unwrap()
}

proptest! {
    /// Both phrasings yield the same command, aspect, and value for any
    /// integer, negative values included.
    #[test]
    fn phrasings_agree_for_all_integers(n in any::<i64>()) {
        let parser = parser();
        let direct = parser.parse(&format!("add xp {n}")).unwrap();
        let prepositional = parser.parse(&format!("add {n} to xp")).unwrap();

        prop_assert_eq!(direct.value.clone(), Some(Value::Int(n)));
        prop_assert_eq!(direct.value, prepositional.value);
        prop_assert_eq!(
            direct.command.name.as_str(),
            prepositional.command.name.as_str()
        );
        prop_assert_eq!(
            direct.aspect.unwrap().name.as_str(),
            prepositional.aspect.unwrap().name.as_str()
        );
    }

    /// Quoted strings come back exactly, quotes stripped.
    #[test]
    fn quoted_values_round_trip(s in "[^\"\r\n]{0,40}") {
        let parser = parser();
        let parsed = parser.parse(&format!("set campaign \"{s}\"")).unwrap();
        prop_assert_eq!(parsed.value, Some(Value::Text(s)));
    }

    /// A query whose first word is not a command never parses.
    #[test]
    fn non_command_first_word_is_rejected(word in "[a-z]{1,12}") {
        let parser = parser();
        prop_assume!(parser.vocabulary().command(&word).is_none());
        let query = format!("{word} xp 100");
        prop_assert!(parser.parse(&query).is_err());
    }

    /// Whitespace-only queries resolve to the default command.
    #[test]
    fn blank_queries_resolve_to_default(ws in "[ \t]{0,10}") {
        let parser = parser();
        let parsed = parser.parse(&ws).unwrap();
        prop_assert_eq!(parsed.command.kind, CommandKind::Default);
    }

    /// The parser never panics, whatever the input.
    #[test]
    fn parse_never_panics(input in "\\PC{0,60}") {
        let parser = parser();
        let _ = parser.parse(&input);
    }
}
