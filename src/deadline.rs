// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Time budget for a single search.
//!
//! A very short or very common query can match hundreds of thousands of
//! times, and attribution plus snippet assembly cost grows with the match
//! count. Each stage checks the deadline at coarse intervals and gives up
//! with `DeadlineExceeded` instead of running unbounded.

use crate::error::{FolioError, Result};
use std::time::{Duration, Instant};

/// Optional point in time after which a search stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Deadline(Option<Instant>);

impl Deadline {
    /// No limit.
    pub const NONE: Deadline = Deadline(None);

    pub fn at(instant: Instant) -> Self {
        Self(Some(instant))
    }

    pub fn after(budget: Duration) -> Self {
        Self(Instant::now().checked_add(budget))
    }

    /// `after(budget)` when a budget is configured, otherwise `NONE`.
    pub fn from_budget(budget: Option<Duration>) -> Self {
        budget.map_or(Self::NONE, Self::after)
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.0.is_some_and(|at| Instant::now() >= at)
    }

    /// Fail with `DeadlineExceeded { stage }` once the deadline has passed.
    #[inline]
    pub fn check(&self, stage: &'static str) -> Result<()> {
        if self.is_expired() {
            Err(FolioError::DeadlineExceeded { stage })
        } else {
            Ok(())
        }
    }
}
