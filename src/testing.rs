// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It builds synthetic corpora laid out like the real one: a table of
//! contents listing every title once, then each work under its heading.

#![doc(hidden)]

use crate::config::SearchConfig;
use crate::corpus::Corpus;
use crate::error::Result;
use crate::searcher::Searcher;

/// Builder for a corpus with a table of contents and titled works.
#[derive(Debug, Clone)]
pub struct CorpusBuilder {
    preamble: String,
    works: Vec<(String, String)>,
    line_ending: &'static str,
}

impl Default for CorpusBuilder {
    fn default() -> Self {
        Self {
            preamble: "Contents".to_string(),
            works: Vec::new(),
            line_ending: "\n",
        }
    }
}

impl CorpusBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text placed before the title listing.
    pub fn preamble(mut self, text: &str) -> Self {
        self.preamble = text.to_string();
        self
    }

    /// Use `\r\n` line endings, as the distributed corpus does.
    pub fn crlf(mut self) -> Self {
        self.line_ending = "\r\n";
        self
    }

    pub fn work(mut self, title: &str, body: &str) -> Self {
        self.works.push((title.to_string(), body.to_string()));
        self
    }

    /// Titles in the order they were added.
    pub fn titles(&self) -> Vec<String> {
        self.works.iter().map(|(title, _)| title.clone()).collect()
    }

    /// Byte offset where `title`'s heading will land.
    pub fn heading_offset(&self, title: &str) -> Option<usize> {
        let text = self.text();
        text.match_indices(title).nth(1).map(|(offset, _)| offset)
    }

    pub fn text(&self) -> String {
        let nl = self.line_ending;
        let mut text = String::new();
        text.push_str(&self.preamble);
        text.push_str(nl);
        text.push_str(nl);
        for (title, _) in &self.works {
            text.push_str(title);
            text.push_str(nl);
        }
        for (title, body) in &self.works {
            text.push_str(nl);
            text.push_str(title);
            text.push_str(nl);
            text.push_str(nl);
            text.push_str(body);
            text.push_str(nl);
        }
        text
    }

    pub fn corpus(&self) -> Corpus {
        Corpus::from_text(self.text())
    }

    pub fn searcher(&self, config: SearchConfig) -> Result<Searcher> {
        Searcher::from_corpus(self.corpus(), &self.titles(), config)
    }
}

/// Two short works where "love" occurs once in each, once inside "lovely".
pub fn two_work_corpus() -> CorpusBuilder {
    CorpusBuilder::new()
        .work("TITLE A", "My love is as a fever, longing still.")
        .work("TITLE B", "A lovely day for it.")
}

/// A miniature of the distributed corpus with two real titles.
pub fn sonnets_corpus() -> CorpusBuilder {
    CorpusBuilder::new()
        .preamble("The Complete Works of William Shakespeare\r\n\r\nContents")
        .crlf()
        .work(
            "THE SONNETS",
            "                    1\r\n\r\n\
From fairest creatures we desire increase,\r\n\
That thereby beauty’s rose might never die,",
        )
        .work(
            "ALL’S WELL THAT ENDS WELL",
            "ACT I\r\n\r\nSCENE I. Rossillion. A room in the Countess’s palace.",
        )
}
