use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use tracing::{debug, info};

use crate::eligibility::{classify_month, elapsed_split, summarize};
use crate::holidays::{bank_holidays, HolidaySet};
use crate::model::month::MonthId;
use crate::model::pattern::WorkPattern;
use crate::model::settings::Settings;
use crate::model::status::{DayStatus, StatusMap};
use crate::repository::StatusRepository;
use crate::service::dto::MonthReport;

pub struct TrackerService<R: StatusRepository> {
    repo: R,
}

impl<R: StatusRepository> TrackerService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn statuses(&self, month: MonthId) -> Result<StatusMap> {
        self.repo.load(month)
    }

    pub fn set_day(&self, month: MonthId, day: u32, status: DayStatus) -> Result<()> {
        check_day(month, day)?;
        let mut statuses = self.repo.load(month)?;
        if status == DayStatus::Unset {
            statuses.remove(&day);
        } else {
            statuses.insert(day, status);
        }
        debug!(%month, day, %status, "set day status");
        self.repo.save(month, &statuses)
    }

    /// Advances a day to its next status. Days outside the work pattern are
    /// left alone and yield `None`.
    pub fn cycle_day(&self, month: MonthId, day: u32, pattern: WorkPattern) -> Result<Option<DayStatus>> {
        let date = check_day(month, day)?;
        if !pattern.is_base_working(date) {
            debug!(%month, day, %pattern, "not a working day, ignoring");
            return Ok(None);
        }
        let current = self.repo.load(month)?.get(&day).copied().unwrap_or_default();
        let next = current.next();
        self.set_day(month, day, next)?;
        Ok(Some(next))
    }

    pub fn reset_month(&self, month: MonthId) -> Result<()> {
        info!(%month, "resetting month");
        self.repo.clear(month)
    }

    pub fn report(&self, month: MonthId, settings: &Settings, today: NaiveDate) -> Result<MonthReport> {
        let statuses = self.repo.load(month)?;
        Ok(build_report(month, settings, &statuses, today))
    }
}

/// Evaluates `month` for a display layer. Pure.
pub fn build_report(month: MonthId, settings: &Settings, statuses: &StatusMap, today: NaiveDate) -> MonthReport {
    let holidays: Vec<_> = if settings.include_holidays {
        bank_holidays(month.year())
            .into_iter()
            .filter(|h| month.contains(h.date))
            .collect()
    } else {
        Vec::new()
    };
    let holiday_set: HolidaySet = holidays.iter().map(|h| h.date).collect();

    let days = classify_month(month, settings.pattern, &holiday_set, statuses);
    let split = elapsed_split(&days, month, today);
    let summary = summarize(&days, settings.percent, split);

    MonthReport {
        month,
        label: month.label(),
        pattern: settings.pattern,
        percent: settings.percent,
        include_holidays: settings.include_holidays,
        days,
        holidays,
        message: summary.message(),
        summary,
    }
}

fn check_day(month: MonthId, day: u32) -> Result<NaiveDate> {
    month
        .date(day)
        .ok_or_else(|| anyhow!("{} has no day {}", month.label(), day))
}
