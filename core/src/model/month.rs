use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// A calendar month, stored as its first day.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub struct MonthId(NaiveDate);

impl MonthId {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(anyhow!("Month out of range: {}", month));
        }
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(MonthId)
            .ok_or_else(|| anyhow!("Year out of range: {}", year))
    }

    pub fn from_date(date: NaiveDate) -> Self {
        // Day 1 always exists in a month that contains `date`.
        MonthId(date.with_day(1).unwrap_or(date))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.0
    }

    pub fn days_in_month(&self) -> u32 {
        match self.0.checked_add_months(Months::new(1)) {
            Some(next) => (next - self.0).num_days() as u32,
            // Only December of the last representable year lands here.
            None => 31,
        }
    }

    /// The date of `day` in this month, or `None` when the month has no such day.
    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        if day == 0 {
            return None;
        }
        self.0.with_day(day)
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> {
        self.0.iter_days().take(self.days_in_month() as usize)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    pub fn succ(&self) -> Option<MonthId> {
        self.0.checked_add_months(Months::new(1)).map(MonthId)
    }

    pub fn pred(&self) -> Option<MonthId> {
        self.0.checked_sub_months(Months::new(1)).map(MonthId)
    }

    /// Shifts by a signed number of months.
    pub fn offset(&self, months: i32) -> Option<MonthId> {
        let n = Months::new(months.unsigned_abs());
        if months >= 0 {
            self.0.checked_add_months(n).map(MonthId)
        } else {
            self.0.checked_sub_months(n).map(MonthId)
        }
    }

    /// e.g. "March 2025"
    pub fn label(&self) -> String {
        self.0.format("%B %Y").to_string()
    }
}

impl fmt::Display for MonthId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for MonthId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (y, m) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| anyhow!("Expected YYYY-MM, got '{}'", s))?;
        let year: i32 = y.parse().map_err(|_| anyhow!("Invalid year in '{}'", s))?;
        let month: u32 = m.parse().map_err(|_| anyhow!("Invalid month in '{}'", s))?;
        MonthId::new(year, month)
    }
}

impl TryFrom<String> for MonthId {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<MonthId> for String {
    fn from(month: MonthId) -> Self {
        month.to_string()
    }
}
