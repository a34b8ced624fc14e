/**
 * A simple parser to parse a pattern string into a regex AST.
 */

use log::trace;
use crate::ast::{Node, Quantifier};
use crate::error::ParseError;

/*
 * Reference grammar for the parser:
 *
 * alternative ::=
 *               | sequence '|' alternative
 *               | sequence
 *               ;
 *
 * sequence    ::=
 *               | quantified CONCAT sequence
 *               | quantified
 *               ;
 *
 * quantified  ::=
 *               | atom '*'
 *               | atom '?'
 *               | atom
 *               ;
 *
 * atom        ::=
 *               | '(' alternative ')'
 *               | ASCII_ALPHANUMERIC
 *               ;
 *
 * CONCAT is never written in the pattern, the tokenizer synthesizes it
 * between two adjacent operands. Both binary rules recurse on the right, so
 * `abc` and `a|b|c` nest to the right. Keep it that way, derivations are
 * compared structurally.
 */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Literal(char),
    Open,
    Close,
    Bar,
    Star,
    Question,
    Concat,
    Other(char),
}

impl TokenKind {
    fn from_char(c: char) -> Self {
        match c {
            '(' => TokenKind::Open,
            ')' => TokenKind::Close,
            '|' => TokenKind::Bar,
            '*' => TokenKind::Star,
            '?' => TokenKind::Question,
            c if is_literal_char(c) => TokenKind::Literal(c),
            c => TokenKind::Other(c),
        }
    }

    fn source_char(self) -> char {
        match self {
            TokenKind::Literal(c) | TokenKind::Other(c) => c,
            TokenKind::Open => '(',
            TokenKind::Close => ')',
            TokenKind::Bar => '|',
            TokenKind::Star => '*',
            TokenKind::Question => '?',
            TokenKind::Concat => '.',
        }
    }

    /// Can this token be the left side of an implicit concatenation?
    fn ends_operand(self) -> bool {
        match self {
            TokenKind::Literal(_) | TokenKind::Close | TokenKind::Star | TokenKind::Question => true,
            _ => false,
        }
    }

    /// Can this token be the right side of an implicit concatenation?
    fn may_follow_operand(self) -> bool {
        match self {
            TokenKind::Close | TokenKind::Bar | TokenKind::Star | TokenKind::Question => false,
            _ => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Character offset in the source pattern. A synthesized `Concat` takes
    /// the offset of the token that follows it.
    pub position: usize,
}

/// Splits the pattern into tokens, making every implicit concatenation explicit.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut result = Vec::new();
    let mut current: Option<Token> = None;

    for (position, c) in source.chars().enumerate() {
        let lookahead = Token{ kind: TokenKind::from_char(c), position };
        if let Some(current) = current {
            result.push(current);
            if current.kind.ends_operand() && lookahead.kind.may_follow_operand() {
                result.push(Token{ kind: TokenKind::Concat, position });
            }
        }
        current = Some(lookahead);
    }
    result.extend(current);

    result
}

/// A small helper to walk the token stream without mutation.
#[derive(Clone, Copy)]
struct Tokens<'a> {
    rest: &'a [Token],
    end: usize,
}

impl <'a> Tokens<'a> {
    fn next(&self) -> Option<(Token, Tokens<'a>)> {
        match self.rest.split_first() {
            Some((first, rest)) => Some((*first, Tokens{ rest, end: self.end })),
            None => None,
        }
    }

    fn position(&self) -> usize {
        self.rest.first().map_or(self.end, |t| t.position)
    }
}

/**
 * Actual parsing.
 */

pub fn parse(source: &str) -> Result<Box<Node>, ParseError> {
    let tokens = tokenize(source);
    trace!("tokens of {:?}: {:?}", source, tokens);

    let it = Tokens{ rest: &tokens, end: source.chars().count() };
    let (node, it) = parse_alternative(it)?;
    match it.next() {
        None => Ok(node),
        Some((tok, _)) => Err(ParseError::TrailingInput{
            found: tok.kind.source_char(),
            position: tok.position,
        }),
    }
}

type ParseResult<'a, T> = Result<(T, Tokens<'a>), ParseError>;

fn parse_alternative(it: Tokens<'_>) -> ParseResult<'_, Box<Node>> {
    let (first, it) = parse_sequence(it)?;
    if let Some((Token{ kind: TokenKind::Bar, .. }, it)) = it.next() {
        let (second, it) = parse_alternative(it)?;
        Ok((Box::new(Node::Alternative{ first, second }), it))
    }
    else {
        Ok((first, it))
    }
}

fn parse_sequence(it: Tokens<'_>) -> ParseResult<'_, Box<Node>> {
    let (first, it) = parse_quantified(it)?;
    if let Some((Token{ kind: TokenKind::Concat, .. }, it)) = it.next() {
        let (second, it) = parse_sequence(it)?;
        Ok((Box::new(Node::Sequence{ first, second }), it))
    }
    else {
        Ok((first, it))
    }
}

fn parse_quantified(it: Tokens<'_>) -> ParseResult<'_, Box<Node>> {
    let (subnode, it) = parse_atom(it)?;
    let quantifier = match it.next() {
        Some((Token{ kind: TokenKind::Star, .. }, rest)) => Some((Quantifier::Star, rest)),
        Some((Token{ kind: TokenKind::Question, .. }, rest)) => Some((Quantifier::Optional, rest)),
        _ => None,
    };
    match quantifier {
        Some((quantifier, it)) => Ok((Box::new(Node::Quantified{ subnode, quantifier }), it)),
        None => Ok((subnode, it)),
    }
}

fn parse_atom(it: Tokens<'_>) -> ParseResult<'_, Box<Node>> {
    match it.next() {
        Some((Token{ kind: TokenKind::Open, position: open }, it)) => {
            let (node, it) = parse_alternative(it)?;
            if let Some((Token{ kind: TokenKind::Close, .. }, it)) = it.next() {
                Ok((node, it))
            }
            else {
                Err(ParseError::UnclosedGroup{ open, position: it.position() })
            }
        },

        Some((Token{ kind: TokenKind::Literal(c), .. }, it)) => Ok((Box::new(Node::Literal(c)), it)),

        Some((tok, _)) => Err(ParseError::UnexpectedChar{
            found: tok.kind.source_char(),
            position: tok.position,
        }),

        None => Err(ParseError::UnexpectedEnd{ position: it.position() }),
    }
}

fn is_literal_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

// Tests ///////////////////////////////////////////////////////////////////////
