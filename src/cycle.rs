// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

/// Day of month on which a pay cycle starts.
pub const CYCLE_DAY: u32 = 25;

/// Half-open `[start, end)` window between two consecutive paydays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PayCycle {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl PayCycle {
    pub fn containing(date: NaiveDate) -> Self {
        // Every month has a 25th, so neither construction can fail.
        let anchor = date.with_day(CYCLE_DAY).unwrap_or(date);
        let start = if date.day() >= CYCLE_DAY {
            anchor
        } else {
            anchor - Months::new(1)
        };
        Self {
            start,
            end: start + Months::new(1),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    /// Bounds as `YYYY-MM-DD` strings; these compare correctly against stored timestamps.
    pub fn bounds_sql(&self) -> (String, String) {
        (self.start.to_string(), self.end.to_string())
    }
}
