use serde::{Serialize, Deserialize};

use crate::holidays::ObservedHoliday;
use crate::model::month::MonthId;
use crate::model::pattern::WorkPattern;
use crate::model::settings::Settings;
use crate::model::summary::{DayClass, ProgressSummary};

/// Everything a display layer needs to draw one month.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MonthReport {
    pub month: MonthId,
    pub label: String, // "March 2025"
    pub pattern: WorkPattern,
    pub percent: u32,
    pub include_holidays: bool,
    pub days: Vec<DayClass>,
    /// Bank holidays observed inside the month; empty when holidays are off.
    pub holidays: Vec<ObservedHoliday>,
    pub summary: ProgressSummary,
    pub message: String,
}

impl MonthReport {
    pub fn settings(&self) -> Settings {
        Settings {
            month: Some(self.month),
            pattern: self.pattern,
            percent: self.percent,
            include_holidays: self.include_holidays,
        }
    }

    pub fn day(&self, day: u32) -> Option<&DayClass> {
        self.days.iter().find(|d| d.day == day)
    }

    pub fn holiday_on(&self, day: u32) -> Option<&ObservedHoliday> {
        let date = self.day(day)?.date;
        self.holidays.iter().find(|h| h.date == date)
    }
}

/// One row of the stored-months overview.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MonthHistory {
    pub month: MonthId,
    pub label: String,
    pub summary: ProgressSummary,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ImportReport {
    pub months: Vec<MonthId>,
    pub days: usize,
    /// Legacy exclusion labels rewritten during import.
    pub migrated: usize,
    pub dropped: usize,
    pub settings: Option<Settings>,
}
