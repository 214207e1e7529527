//! Recursive-descent query evaluation.
//!
//! Consumes the token stream with one-token lookahead and extracts the
//! grammatical parts of a query:
//!
//! ```text
//! Query        := ε                        -- resolves to `default`
//!               | COMMAND AspectClause?
//!               | COMMAND ValueClause?
//! AspectClause := ASPECT Value?
//! ValueClause  := Value (PREPOSITION ASPECT)?
//! Value        := INTEGER | QUOTED
//! ```
//!
//! The two phrasings `<command> <aspect> <value>` and
//! `<command> <value> <preposition> <aspect>` are equivalent surface
//! syntax for the same invocation.

use thiserror::Error;

use tally_foundation::Value;

use crate::lexer::{Lexer, Token, TokenKind, TokenStream};
use crate::vocabulary::{Aspect, Command, Preposition, VocabularyRegistry};

/// A query that failed to match the grammar.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The lookahead token was missing or of the wrong kind.
    #[error("expected {0}")]
    Expected(TokenKind),

    /// A preposition with no aspect after it.
    #[error("expected an aspect after preposition `{0}`")]
    DanglingPreposition(String),

    /// An integer literal that does not fit in 64 bits.
    #[error("integer literal `{0}` is out of range")]
    IntegerOutOfRange(String),

    /// A lexed keyword with no registry entry. Only possible if the
    /// vocabulary changed between pattern compilation and lookup.
    #[error("unknown word `{0}`")]
    UnknownWord(String),
}

/// The grammatical parts of one query, resolved against the vocabulary
/// but not yet validated.
#[derive(Clone, Debug)]
pub struct ParsedQuery<'v> {
    /// The leading command; `default` for empty input.
    pub command: &'v Command,
    /// The aspect, from either phrasing.
    pub aspect: Option<&'v Aspect>,
    /// The extracted value, if any.
    pub value: Option<Value>,
    /// The preposition, when the alternate phrasing was used.
    pub preposition: Option<&'v Preposition>,
}

/// Recursive-descent evaluator over a compiled vocabulary.
pub struct QueryParser {
    vocabulary: VocabularyRegistry,
    lexer: Lexer,
}

impl QueryParser {
    /// Creates a parser, compiling the lexer pattern once.
    ///
    /// # Errors
    ///
    /// Returns an error if the vocabulary cannot be compiled into a
    /// lexer pattern.
    pub fn new(vocabulary: VocabularyRegistry) -> tally_foundation::Result<Self> {
        let lexer = Lexer::compile(&vocabulary)?;
        Ok(Self { vocabulary, lexer })
    }

    /// Gets a reference to the vocabulary registry.
    #[must_use]
    pub const fn vocabulary(&self) -> &VocabularyRegistry {
        &self.vocabulary
    }

    /// Gets a mutable reference to the vocabulary registry.
    ///
    /// Callers that change the vocabulary must [`recompile`](Self::recompile)
    /// before the next parse; the lexer pattern is not rebuilt per call.
    pub fn vocabulary_mut(&mut self) -> &mut VocabularyRegistry {
        &mut self.vocabulary
    }

    /// Rebuilds the lexer pattern after vocabulary changes.
    ///
    /// # Errors
    ///
    /// Returns an error if the changed vocabulary no longer compiles.
    pub fn recompile(&mut self) -> tally_foundation::Result<()> {
        self.lexer = Lexer::compile(&self.vocabulary)?;
        Ok(())
    }

    /// Parses one query into its grammatical parts.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the token stream does not match the
    /// grammar; the first token, if any exist, must be a command.
    pub fn parse(&self, query: &str) -> Result<ParsedQuery<'_>, ParseError> {
        let mut cursor = Cursor::new(self.lexer.tokens(query));
        if cursor.peek().is_none() {
            if query.trim().is_empty() {
                // No tokens at all: the empty query resolves to `default`.
                return Ok(ParsedQuery {
                    command: self.lookup_command("default")?,
                    aspect: None,
                    value: None,
                    preposition: None,
                });
            }
            // Non-blank text that lexed to nothing: the leading word is
            // not in the vocabulary.
            return Err(ParseError::Expected(TokenKind::Command));
        }
        self.query(&mut cursor)
    }

    /// Query := COMMAND AspectClause? | COMMAND ValueClause?
    fn query<'v>(&'v self, cursor: &mut Cursor<'_, '_>) -> Result<ParsedQuery<'v>, ParseError> {
        let command_token = cursor.expect(TokenKind::Command)?;
        let command = self.lookup_command(&command_token.text)?;

        let mut aspect = None;
        let mut value = None;
        let mut preposition = None;

        if let Some(aspect_token) = cursor.accept(TokenKind::Aspect) {
            let (found, trailing) = self.aspect_clause(&aspect_token, cursor)?;
            aspect = Some(found);
            value = trailing;
        } else if let Some(found) = value_opt(cursor)? {
            value = Some(found);
            if let Some(prep_token) = cursor.accept(TokenKind::Preposition) {
                let (found_aspect, found_prep) = self.preposition_clause(&prep_token, cursor)?;
                aspect = Some(found_aspect);
                preposition = Some(found_prep);
            }
        }

        Ok(ParsedQuery {
            command,
            aspect,
            value,
            preposition,
        })
    }

    /// AspectClause := ASPECT Value?
    fn aspect_clause<'v>(
        &'v self,
        aspect_token: &Token,
        cursor: &mut Cursor<'_, '_>,
    ) -> Result<(&'v Aspect, Option<Value>), ParseError> {
        let aspect = self.lookup_aspect(&aspect_token.text)?;
        let value = value_opt(cursor)?;
        Ok((aspect, value))
    }

    /// The tail of ValueClause: PREPOSITION ASPECT, aspect mandatory.
    fn preposition_clause<'v>(
        &'v self,
        prep_token: &Token,
        cursor: &mut Cursor<'_, '_>,
    ) -> Result<(&'v Aspect, &'v Preposition), ParseError> {
        let preposition = self.lookup_preposition(&prep_token.text)?;
        let aspect_token = cursor
            .accept(TokenKind::Aspect)
            .ok_or_else(|| ParseError::DanglingPreposition(preposition.name.clone()))?;
        let aspect = self.lookup_aspect(&aspect_token.text)?;
        Ok((aspect, preposition))
    }

    fn lookup_command(&self, name: &str) -> Result<&Command, ParseError> {
        self.vocabulary
            .command(name)
            .ok_or_else(|| ParseError::UnknownWord(name.to_string()))
    }

    fn lookup_aspect(&self, name: &str) -> Result<&Aspect, ParseError> {
        self.vocabulary
            .aspect(name)
            .ok_or_else(|| ParseError::UnknownWord(name.to_string()))
    }

    fn lookup_preposition(&self, name: &str) -> Result<&Preposition, ParseError> {
        self.vocabulary
            .preposition(name)
            .ok_or_else(|| ParseError::UnknownWord(name.to_string()))
    }
}

/// Value := INTEGER | QUOTED
///
/// Integer literals are coerced to `i64`; quoted strings keep their text
/// with the surrounding quotes stripped.
fn value_opt(cursor: &mut Cursor<'_, '_>) -> Result<Option<Value>, ParseError> {
    if let Some(token) = cursor.accept(TokenKind::Integer) {
        let n: i64 = token
            .text
            .parse()
            .map_err(|_| ParseError::IntegerOutOfRange(token.text.clone()))?;
        return Ok(Some(Value::Int(n)));
    }
    if let Some(token) = cursor.accept(TokenKind::Quoted) {
        return Ok(Some(Value::Text(strip_quotes(&token.text))));
    }
    Ok(None)
}

fn strip_quotes(text: &str) -> String {
    text.strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(text)
        .to_string()
}

/// One-token-lookahead cursor over a token stream.
struct Cursor<'l, 't> {
    tokens: TokenStream<'l, 't>,
    lookahead: Option<Token>,
}

impl<'l, 't> Cursor<'l, 't> {
    fn new(mut tokens: TokenStream<'l, 't>) -> Self {
        let lookahead = tokens.next();
        Self { tokens, lookahead }
    }

    /// The lookahead token, unconsumed.
    fn peek(&self) -> Option<&Token> {
        self.lookahead.as_ref()
    }

    /// Consumes and returns the lookahead if it has the given kind.
    fn accept(&mut self, kind: TokenKind) -> Option<Token> {
        if self.lookahead.as_ref().is_some_and(|t| t.kind == kind) {
            let token = self.lookahead.take();
            self.lookahead = self.tokens.next();
            token
        } else {
            None
        }
    }

    /// Like [`accept`](Self::accept), but a mismatch is a syntax error.
    fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        self.accept(kind).ok_or(ParseError::Expected(kind))
    }
}
