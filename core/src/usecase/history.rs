use crate::model::settings::Settings;
use crate::repository::StatusRepository;
use crate::service::dto::MonthHistory;
use crate::service::tracker_service::build_report;
use chrono::NaiveDate;
use anyhow::Result;

/// Progress for every month that has stored entries.
pub struct HistoryUseCase<'a, R: StatusRepository> {
    repo: &'a R,
}

impl<'a, R: StatusRepository> HistoryUseCase<'a, R> {
    pub fn new(repo: &'a R) -> Self {
        Self { repo }
    }

    /// Newest month first, each evaluated with `settings`.
    pub fn get_monthly_history(&self, settings: &Settings, today: NaiveDate) -> Result<Vec<MonthHistory>> {
        let mut months = self.repo.months()?;
        months.sort_by(|a, b| b.cmp(a));

        let mut history = Vec::with_capacity(months.len());
        for month in months {
            let statuses = self.repo.load(month)?;
            let report = build_report(month, settings, &statuses, today);
            history.push(MonthHistory {
                month,
                label: report.label,
                summary: report.summary,
            });
        }
        Ok(history)
    }
}
