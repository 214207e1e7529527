//! Query tokenization.
//!
//! Compiles the current vocabulary into one composite pattern and converts
//! query text into a lazy stream of typed tokens. Because the pattern is
//! built from the registry, a newly registered command, aspect, or
//! preposition becomes recognizable without touching lexer code; callers
//! recompile after changing the vocabulary.

use std::fmt;

use regex::Regex;

use tally_foundation::{Error, Result};

use crate::vocabulary::VocabularyRegistry;

/// The kind of a lexed token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// A registered command name.
    Command,
    /// A registered aspect name.
    Aspect,
    /// A registered preposition.
    Preposition,
    /// An integer literal, optional leading minus sign.
    Integer,
    /// A double-quoted string literal, quotes included.
    Quoted,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Command => write!(f, "command"),
            Self::Aspect => write!(f, "aspect"),
            Self::Preposition => write!(f, "preposition"),
            Self::Integer => write!(f, "integer"),
            Self::Quoted => write!(f, "quoted string"),
        }
    }
}

/// A token from query text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// What the lexer classified this span as.
    pub kind: TokenKind,
    /// The matched text, verbatim.
    pub text: String,
}

/// Capture groups of the composite pattern, in precedence order.
///
/// A word registered under several classes lexes as the highest class;
/// the grammar depends on this because its first token must be a command.
const GROUPS: [(&str, TokenKind); 5] = [
    ("command", TokenKind::Command),
    ("aspect", TokenKind::Aspect),
    ("prep", TokenKind::Preposition),
    ("int", TokenKind::Integer),
    ("string", TokenKind::Quoted),
];

/// A pattern that can never match, standing in for an empty keyword class.
/// An empty alternation would match the empty string at every position.
const NEVER: &str = r"[^\s\S]";

/// A compiled vocabulary lexer.
#[derive(Clone, Debug)]
pub struct Lexer {
    pattern: Regex,
}

impl Lexer {
    /// Compiles the composite pattern from the given vocabulary.
    ///
    /// # Errors
    ///
    /// Returns an error if the assembled pattern fails to compile.
    pub fn compile(vocabulary: &VocabularyRegistry) -> Result<Self> {
        let commands = keyword_alternation(vocabulary.commands().map(|c| c.name.as_str()));
        let aspects = keyword_alternation(vocabulary.aspects().map(|a| a.name.as_str()));
        let prepositions =
            keyword_alternation(vocabulary.prepositions().map(|p| p.name.as_str()));

        let pattern = format!(
            r#"(?i)(?P<command>{commands})|(?P<aspect>{aspects})|(?P<prep>{prepositions})|(?P<int>-?\d+)|(?P<string>"(.*?)")|(?P<ws>\s+)"#
        );
        let pattern =
            Regex::new(&pattern).map_err(|e| Error::invalid_pattern(e.to_string()))?;
        Ok(Self { pattern })
    }

    /// Returns a lazy token stream over the given text.
    ///
    /// The stream is finite and non-restartable: once exhausted, the only
    /// way to see the tokens again is to lex the text from the start.
    #[must_use]
    pub fn tokens<'l, 't>(&'l self, text: &'t str) -> TokenStream<'l, 't> {
        TokenStream {
            pattern: &self.pattern,
            text,
            pos: 0,
        }
    }
}

/// Builds one word-bounded alternation over a keyword class.
///
/// Longest names first, so a short name can never shadow a longer name
/// that shares its prefix (alternation is first-match-wins).
fn keyword_alternation<'a>(names: impl Iterator<Item = &'a str>) -> String {
    let mut names: Vec<&str> = names.collect();
    if names.is_empty() {
        return NEVER.to_string();
    }
    names.sort_by_key(|name| std::cmp::Reverse(name.len()));
    let bounded: Vec<String> = names
        .iter()
        .map(|name| format!(r"\b{}\b", regex::escape(name)))
        .collect();
    bounded.join("|")
}

/// A lazy, finite, non-restartable sequence of tokens.
///
/// Whitespace is recognized but filtered out. Scanning is anchored at the
/// previous match's end: an unrecognizable span ends the stream early,
/// which the parser treats as a syntax error if it expected more input.
#[derive(Debug)]
pub struct TokenStream<'l, 't> {
    pattern: &'l Regex,
    text: &'t str,
    pos: usize,
}

impl Iterator for TokenStream<'_, '_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if self.pos >= self.text.len() {
                return None;
            }
            let caps = self.pattern.captures_at(self.text, self.pos)?;
            let whole = caps.get(0)?;
            if whole.start() != self.pos {
                // A gap before the next match means the text here is not
                // part of the vocabulary; the stream ends.
                return None;
            }
            self.pos = whole.end();
            if caps.name("ws").is_some() {
                continue;
            }
            for (group, kind) in GROUPS {
                if let Some(m) = caps.name(group) {
                    return Some(Token {
                        kind,
                        text: m.as_str().to_string(),
                    });
                }
            }
            return None;
        }
    }
}
