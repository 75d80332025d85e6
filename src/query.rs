// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Compiled search queries.
//!
//! A query is literal by default: user input is never interpreted as pattern
//! syntax. Regex syntax is an explicit opt-in and is the only way to get a
//! `InvalidPattern` error.
//!
//! Both syntaxes share the same match shape: the query itself, optionally
//! widened by one ASCII word character (`[0-9A-Za-z_]`) on either side, the
//! way `\w?<query>\w?` would match. Matching is case-insensitive: literal
//! needles are folded exactly like the corpus (see [`crate::corpus::fold`]).

use crate::corpus::fold;
use crate::error::{FolioError, Result};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// How the query string is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuerySyntax {
    /// Plain substring, special characters have no meaning
    #[default]
    Literal,
    /// Regular expression (`regex` crate syntax)
    Regex,
}

#[derive(Debug, Clone)]
enum Matcher {
    /// Folded needle, matched against the folded corpus
    Literal(String),
    Regex {
        /// `\w?(?:query)\w?`, used to find spans
        widened: Regex,
        /// The bare query, used to re-locate the highlight inside a span
        inner: Regex,
    },
}

/// A query ready to run against the folded corpus.
#[derive(Debug, Clone)]
pub struct Query {
    raw: String,
    matcher: Matcher,
}

/// ASCII word character, the class `\w` covers without Unicode.
#[inline]
pub(crate) fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

impl Query {
    pub fn parse(raw: &str, syntax: QuerySyntax) -> Result<Self> {
        match syntax {
            QuerySyntax::Literal => Self::literal(raw),
            QuerySyntax::Regex => Self::regex(raw),
        }
    }

    /// Case-insensitive literal query.
    pub fn literal(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(FolioError::EmptyQuery);
        }
        Ok(Self {
            raw: raw.to_string(),
            matcher: Matcher::Literal(fold(raw)),
        })
    }

    /// Case-insensitive regular expression query.
    pub fn regex(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(FolioError::EmptyQuery);
        }
        let compile = |pattern: &str| {
            RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .map_err(|source| FolioError::InvalidPattern {
                    pattern: raw.to_string(),
                    source,
                })
        };
        let inner = compile(raw)?;
        let widened = compile(&format!(r"(?-u:\w)?(?:{})(?-u:\w)?", raw))?;
        Ok(Self {
            raw: raw.to_string(),
            matcher: Matcher::Regex { widened, inner },
        })
    }

    /// The query as the caller wrote it.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn syntax(&self) -> QuerySyntax {
        match self.matcher {
            Matcher::Literal(_) => QuerySyntax::Literal,
            Matcher::Regex { .. } => QuerySyntax::Regex,
        }
    }

    /// Folded literal needle, `None` for regex queries.
    pub(crate) fn needle(&self) -> Option<&str> {
        match &self.matcher {
            Matcher::Literal(needle) => Some(needle),
            Matcher::Regex { .. } => None,
        }
    }

    /// Widened regex, `None` for literal queries.
    pub(crate) fn widened(&self) -> Option<&Regex> {
        match &self.matcher {
            Matcher::Literal(_) => None,
            Matcher::Regex { widened, .. } => Some(widened),
        }
    }

    /// Find the query itself inside a folded span, ignoring widening characters.
    ///
    /// Returns the first occurrence, relative to `span`.
    pub fn locate(&self, span: &str) -> Option<Range<usize>> {
        match &self.matcher {
            Matcher::Literal(needle) => span.find(needle.as_str()).map(|at| at..at + needle.len()),
            Matcher::Regex { inner, .. } => inner
                .find_iter(span)
                .find(|m| !m.is_empty())
                .map(|m| m.range()),
        }
    }
}
