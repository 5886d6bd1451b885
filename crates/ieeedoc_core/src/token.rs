/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Inline reference tokens.
//!
//! Section content may point at figures and tables with
//! `[[FIGURE:<id>]]` and `[[TABLE:<id>]]`, where `<id>` is any non-empty run
//! of characters other than `]`. Everything else in the content is opaque
//! text. A token need not resolve; dangling tokens are a normal state while
//! the author is still creating the target.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use winnow::combinator::alt;
use winnow::error::ContextError;
use winnow::prelude::*;
use winnow::token::take_while;

const OPEN: &str = "[[";
const CLOSE: &str = "]]";

/// What a token points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub enum TokenKind {
    Figure,
    Table,
}

impl TokenKind {
    pub fn tag(self) -> &'static str {
        match self {
            TokenKind::Figure => "FIGURE",
            TokenKind::Table => "TABLE",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A token found in section content. `span` is the byte range of the whole
/// `[[...]]` sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub id: &'a str,
    pub span: Range<usize>,
}

impl Token<'_> {
    pub fn to_markup(&self) -> String {
        markup(self.kind, self.id)
    }
}

/// Content split into literal text and tokens, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Token(Token<'a>),
}

/// The canonical markup for a token.
pub fn markup(kind: TokenKind, id: &str) -> String {
    format!("{}{}:{}{}", OPEN, kind.tag(), id, CLOSE)
}

fn parse_kind(input: &mut &str) -> winnow::Result<TokenKind, ContextError> {
    alt((
        "FIGURE".value(TokenKind::Figure),
        "TABLE".value(TokenKind::Table),
    ))
    .parse_next(input)
}

/// Parse `[[KIND:id]]` at the start of `input`.
fn parse_token<'s>(input: &mut &'s str) -> winnow::Result<(TokenKind, &'s str), ContextError> {
    let _ = OPEN.parse_next(input)?;
    let kind = parse_kind.parse_next(input)?;
    let _ = ':'.parse_next(input)?;
    let id = take_while(1.., |c: char| c != ']').parse_next(input)?;
    let _ = CLOSE.parse_next(input)?;
    Ok((kind, id))
}

/// Find every well-formed token in `content`, left to right.
pub fn tokens(content: &str) -> Vec<Token<'_>> {
    scan(content)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Token(token) => Some(token),
            Segment::Text(_) => None,
        })
        .collect()
}

/// Split `content` into text and tokens. Malformed sequences such as
/// `[[FIGURE:]]` or `[[CHART:x]]` stay in the surrounding text.
pub fn scan(content: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut text_start = 0;
    let mut cursor = 0;

    while let Some(found) = content[cursor..].find(OPEN) {
        let start = cursor + found;
        let mut input = &content[start..];
        match parse_token(&mut input) {
            Ok((kind, id)) => {
                let end = content.len() - input.len();
                if text_start < start {
                    segments.push(Segment::Text(&content[text_start..start]));
                }
                segments.push(Segment::Token(Token {
                    kind,
                    id,
                    span: start..end,
                }));
                text_start = end;
                cursor = end;
            }
            // `[` is one byte, so the next char boundary is start + 1.
            Err(_) => cursor = start + 1,
        }
    }

    if text_start < content.len() {
        segments.push(Segment::Text(&content[text_start..]));
    }
    segments
}

/// Splice a token into `content` at byte offset `caret`.
///
/// The caret is clamped to the content length and moved back to the nearest
/// char boundary. Whether `id` exists is not checked here.
pub fn insert_token(content: &str, caret: usize, kind: TokenKind, id: &str) -> String {
    let mut at = caret.min(content.len());
    while !content.is_char_boundary(at) {
        at -= 1;
    }
    let token = markup(kind, id);
    let mut out = String::with_capacity(content.len() + token.len());
    out.push_str(&content[..at]);
    out.push_str(&token);
    out.push_str(&content[at..]);
    out
}
