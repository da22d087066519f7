// ABOUTME: Consecutive-day check-in streak tracking
// ABOUTME: UserStreak advances, resets, or ignores a check-in based on the day gap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vitalis Wellness

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Current and longest consecutive-day check-in streak
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStreak {
    /// Consecutive days ending at `last_check_in_date`
    pub current_streak: u32,
    /// Best streak ever; never decreases
    pub longest_streak: u32,
    /// Date of the most recent recorded check-in
    pub last_check_in_date: Option<NaiveDate>,
}

impl UserStreak {
    /// Empty streak
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a check-in on `date`
    ///
    /// A one-day gap extends the streak, a longer gap restarts it at 1, and a
    /// repeated day is a no-op. Dates earlier than the last check-in are ignored.
    pub fn record_check_in(&mut self, date: NaiveDate) {
        match self.last_check_in_date {
            None => self.current_streak = 1,
            Some(last) => match (date - last).num_days() {
                0 => return,
                1 => self.current_streak = self.current_streak.saturating_add(1),
                gap if gap > 1 => self.current_streak = 1,
                _ => {
                    debug!(%date, %last, "Ignoring check-in dated before the last recorded check-in");
                    return;
                }
            },
        }

        self.last_check_in_date = Some(date);
        self.longest_streak = self.longest_streak.max(self.current_streak);
    }

    /// Whether the streak is still alive on `today` (checked in today or yesterday)
    #[must_use]
    pub fn is_active(&self, today: NaiveDate) -> bool {
        self.last_check_in_date
            .is_some_and(|last| (0..=1).contains(&(today - last).num_days()))
    }
}
