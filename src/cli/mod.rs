// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the folio command-line interface.
//!
//! Four subcommands: `serve` runs the HTTP API, `search` and `work` query a
//! corpus from the terminal, and `inspect` prints the corpus layout the
//! boundary index found. Every subcommand loads the corpus the same way, so a
//! title list that fails `inspect` also fails `serve`.

pub mod display;

use clap::{Args, Parser, Subcommand};
use folio::api::{Compression, ResponseLayout, DEFAULT_PORT};
use folio::{PageMode, SearchConfig, DEFAULT_CONTEXT_BYTES, DEFAULT_CORPUS_FILE, DEFAULT_PAGE_SIZE};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "folio",
    about = "Case-insensitive search over a collected-works corpus",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Where the corpus and its title list come from
#[derive(Args, Clone, Debug)]
pub struct CorpusArgs {
    /// Corpus text file
    #[arg(long, env = "FOLIO_CORPUS", default_value = DEFAULT_CORPUS_FILE)]
    pub corpus: PathBuf,

    /// Title list, one per line in corpus order
    ///
    /// Defaults to the built-in Complete Works of Shakespeare list.
    #[arg(long)]
    pub titles: Option<PathBuf>,
}

/// Search behaviour shared by `serve` and `search`
#[derive(Args, Clone, Debug)]
pub struct SearchArgs {
    /// Bytes of context on each side of a match
    #[arg(long, default_value_t = DEFAULT_CONTEXT_BYTES)]
    pub context_bytes: usize,

    /// Results per page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,

    /// How `page` is read: `number` (1-indexed pages) or `offset` (index of first result)
    #[arg(long, default_value = "number")]
    pub page_mode: PageMode,

    /// Accept regular-expression queries
    #[arg(long)]
    pub allow_regex: bool,

    /// Abort a search after this many milliseconds
    #[arg(long)]
    pub search_timeout_ms: Option<u64>,
}

impl SearchArgs {
    pub fn to_config(&self) -> SearchConfig {
        SearchConfig::default()
            .with_context_bytes(self.context_bytes)
            .with_page_size(self.page_size)
            .with_page_mode(self.page_mode)
            .with_regex(self.allow_regex)
            .with_timeout(self.search_timeout_ms.map(Duration::from_millis))
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the search API and static files
    Serve {
        #[command(flatten)]
        corpus: CorpusArgs,

        #[command(flatten)]
        search: SearchArgs,

        /// HTTP port
        #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Directory served at `/`
        #[arg(long, default_value = "./static")]
        static_dir: PathBuf,

        /// `/search` response shape: `grouped`, `paged` or `paged-grouped`
        #[arg(long, default_value = "grouped")]
        layout: ResponseLayout,

        /// Response compression: `auto` (from Accept-Encoding) or `off`
        #[arg(long, default_value = "auto")]
        compression: Compression,
    },

    /// Search the corpus and print matches grouped by work
    Search {
        #[command(flatten)]
        corpus: CorpusArgs,

        #[command(flatten)]
        search: SearchArgs,

        /// Search query
        query: String,

        /// Treat the query as a regular expression (implies --allow-regex)
        #[arg(long)]
        regex: bool,

        /// Print one page of the flat result list instead of every match
        #[arg(long)]
        page: Option<usize>,
    },

    /// Print the full text of one work
    Work {
        #[command(flatten)]
        corpus: CorpusArgs,

        /// Exact title, as listed in the table of contents
        title: String,
    },

    /// Show corpus size, checksum and the work boundary table
    Inspect {
        #[command(flatten)]
        corpus: CorpusArgs,
    },
}
