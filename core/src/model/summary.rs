use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::model::status::DayStatus;

/// Eligible days before and after today, when today falls in the evaluated month.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ElapsedSplit {
    pub elapsed: u32,
    pub left: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressSummary {
    pub eligible_working_days: u32,
    pub required_days: u32,
    pub completed_days: u32,
    pub remaining_days: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split: Option<ElapsedSplit>,
}

impl ProgressSummary {
    pub fn is_met(&self) -> bool {
        self.remaining_days == 0
    }

    /// Share of the requirement attained, capped at 1.0. An empty requirement counts as met.
    pub fn ratio(&self) -> f64 {
        if self.required_days == 0 {
            return 1.0;
        }
        (self.completed_days as f64 / self.required_days as f64).min(1.0)
    }

    pub fn message(&self) -> String {
        match self.split {
            Some(split) => {
                let tail = if self.is_met() {
                    "You’ve already hit the requirement for this month.".to_string()
                } else {
                    format!(
                        "You still need {} in-office day(s) to meet the target.",
                        self.remaining_days
                    )
                };
                format!(
                    "Working days elapsed: {}. Working days left: {}. {}",
                    split.elapsed, split.left, tail
                )
            }
            None if self.is_met() => {
                "Requirement met for this month based on your entries.".to_string()
            }
            None => format!(
                "You still need {} in-office day(s) to meet the target for this month.",
                self.remaining_days
            ),
        }
    }
}

/// How a single day of the month was classified.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayClass {
    pub day: u32,
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub base_working: bool,
    pub holiday: bool,
    pub status: DayStatus,
}

impl DayClass {
    pub fn is_eligible(&self) -> bool {
        self.base_working && !self.holiday && self.status != DayStatus::Excluded
    }

    pub fn is_completed(&self) -> bool {
        self.is_eligible() && self.status == DayStatus::In
    }
}
