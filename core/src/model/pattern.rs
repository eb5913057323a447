use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::input::expand_key;

/// Which calendar days are candidates for office attendance.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WorkPattern {
    #[serde(rename = "all")]
    AllDays,
    #[default]
    #[serde(rename = "monfri", alias = "weekdays")]
    WeekdaysOnly,
}

impl WorkPattern {
    pub fn is_base_working(self, date: NaiveDate) -> bool {
        match self {
            WorkPattern::AllDays => true,
            WorkPattern::WeekdaysOnly => !is_weekend(date),
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            WorkPattern::AllDays => WorkPattern::WeekdaysOnly,
            WorkPattern::WeekdaysOnly => WorkPattern::AllDays,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WorkPattern::AllDays => "all",
            WorkPattern::WeekdaysOnly => "monfri",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            WorkPattern::AllDays => "All days",
            WorkPattern::WeekdaysOnly => "Mon–Fri",
        }
    }
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

impl fmt::Display for WorkPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WorkPattern {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let key = expand_key(&s.trim().to_lowercase(), &["all", "monfri", "weekdays"])?;
        Ok(match key.as_str() {
            "all" => WorkPattern::AllDays,
            _ => WorkPattern::WeekdaysOnly,
        })
    }
}
