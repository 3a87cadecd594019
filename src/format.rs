//! Display formatting for snapshot fields
//!
//! - Counts use en-US thousands grouping (`1234567` -> `1,234,567`)
//! - Report dates arrive as `YYYYMMDD` and are shown two ways

use chrono::{Datelike, NaiveDate};

use crate::error::{DashboardError, Result};

/// Format a count with en-US thousands separators
pub fn format_count(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if n < 0 {
        grouped.insert(0, '-');
    }
    grouped
}

/// A report date split out of its `YYYYMMDD` form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDate {
    date: NaiveDate,
    assembled: String,
}

impl ReportDate {
    /// Parse an 8-digit `YYYYMMDD` string
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DashboardError::InvalidDate(raw.to_string()));
        }

        let (year, month, day) = (&raw[0..4], &raw[4..6], &raw[6..8]);
        let invalid = || DashboardError::InvalidDate(raw.to_string());

        let date = NaiveDate::from_ymd_opt(
            year.parse().map_err(|_| invalid())?,
            month.parse().map_err(|_| invalid())?,
            day.parse().map_err(|_| invalid())?,
        )
        .ok_or_else(invalid)?;

        Ok(Self {
            date,
            assembled: format!("{month}/{day}/{year}"),
        })
    }

    /// Calendar date (no time zone; the page shows it as local)
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// `MM/DD/YYYY`, built from the raw substrings
    pub fn assembled(&self) -> &str {
        &self.assembled
    }

    /// Long form, e.g. `Fri Jan 15 2021`
    pub fn display(&self) -> String {
        self.date.format("%a %b %d %Y").to_string()
    }

    /// Short en-US form without zero padding, e.g. `1/15/2021`
    pub fn short_display(&self) -> String {
        format!("{}/{}/{}", self.date.month(), self.date.day(), self.date.year())
    }
}
