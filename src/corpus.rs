// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus store: the raw text and its case-folded twin.
//!
//! Folding lower-cases one character at a time and only keeps a lowered
//! character when it encodes to the same number of bytes (`É` to `é`, `Æ` to
//! `æ`). Characters whose lowercase form is longer, shorter, or more than one
//! character stay as they are. An offset into `folded` is therefore the same
//! offset into `text`, with identical char boundaries.

use crate::error::{FolioError, Result};
use std::path::Path;
use tracing::{info, warn};

/// Lower-case `text` without moving any byte offset.
pub fn fold(text: &str) -> String {
    text.chars()
        .map(|c| {
            let mut lower = c.to_lowercase();
            match (lower.next(), lower.next()) {
                (Some(l), None) if l.len_utf8() == c.len_utf8() => l,
                _ => c,
            }
        })
        .collect()
}

/// Immutable corpus text, loaded once.
#[derive(Debug, Clone)]
pub struct Corpus {
    text: String,
    folded: String,
    checksum: u32,
}

impl Corpus {
    /// Read a corpus file into memory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| FolioError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(err) => {
                warn!(
                    path = %path.display(),
                    valid_up_to = err.utf8_error().valid_up_to(),
                    "corpus is not valid UTF-8, replacing invalid sequences"
                );
                String::from_utf8_lossy(err.as_bytes()).into_owned()
            }
        };

        let corpus = Self::from_text(text);
        info!(
            path = %path.display(),
            bytes = corpus.len(),
            checksum = %format!("{:08x}", corpus.checksum),
            "loaded corpus"
        );
        Ok(corpus)
    }

    /// Build a corpus from text already in memory.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let folded = fold(&text);
        let checksum = crc32fast::hash(text.as_bytes());
        Self {
            text,
            folded,
            checksum,
        }
    }

    /// Original-case text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lower-cased text, byte-aligned with `text()`.
    #[inline]
    pub fn folded(&self) -> &str {
        &self.folded
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// CRC32 of the original bytes.
    #[inline]
    pub fn checksum(&self) -> u32 {
        self.checksum
    }

    /// Clamp `start` forward and `end` backward onto char boundaries within the text.
    pub fn clamp_to_chars(&self, start: usize, end: usize) -> (usize, usize) {
        let len = self.text.len();
        let mut start = start.min(len);
        let mut end = end.min(len);
        while start < len && !self.text.is_char_boundary(start) {
            start += 1;
        }
        while end > 0 && !self.text.is_char_boundary(end) {
            end -= 1;
        }
        if end < start {
            end = start;
        }
        (start, end)
    }
}
