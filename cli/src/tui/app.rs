use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use officeday_core::{
    FileSettingsRepository, FileStatusRepository, MonthId, MonthReport, Settings, TrackerService,
};

pub struct App {
    pub service: TrackerService<FileStatusRepository>,
    pub settings_repo: FileSettingsRepository,
    /// Settings as saved on disk; only changes made here are written back.
    pub stored: Settings,
    /// Stored settings with this run's overrides applied.
    pub settings: Settings,
    pub month: MonthId,
    pub today: NaiveDate,
    /// Selected day of month.
    pub cursor: u32,
    pub report: MonthReport,
    pub notice: Option<String>,
}

impl App {
    pub fn new(
        service: TrackerService<FileStatusRepository>,
        settings_repo: FileSettingsRepository,
        stored: Settings,
        settings: Settings,
        today: NaiveDate,
    ) -> Result<App> {
        let month = settings.month.unwrap_or_else(|| MonthId::from_date(today));
        let report = service.report(month, &settings, today)?;
        let cursor = if month.contains(today) { today.day() } else { 1 };
        Ok(App {
            service,
            settings_repo,
            stored,
            settings,
            month,
            today,
            cursor,
            report,
            notice: None,
        })
    }

    fn reload(&mut self) {
        match self.service.report(self.month, &self.settings, self.today) {
            Ok(report) => self.report = report,
            Err(e) => self.notice = Some(format!("Error: {}", e)),
        }
    }

    fn persist_settings(&mut self) {
        self.settings.month = Some(self.month);
        self.stored.month = Some(self.month);
        if let Err(e) = self.settings_repo.save(&self.stored) {
            self.notice = Some(format!("Could not save settings: {}", e));
        }
    }

    /// Moves the selection by `delta` days, staying inside the month.
    pub fn move_cursor(&mut self, delta: i32) {
        let last = self.month.days_in_month() as i32;
        let next = self.cursor as i32 + delta;
        if (1..=last).contains(&next) {
            self.cursor = next as u32;
        }
    }

    fn show_month(&mut self, month: Option<MonthId>) {
        let Some(month) = month else { return };
        self.month = month;
        self.cursor = self.cursor.min(month.days_in_month());
        self.persist_settings();
        self.reload();
    }

    pub fn next_month(&mut self) {
        self.show_month(self.month.succ());
    }

    pub fn previous_month(&mut self) {
        self.show_month(self.month.pred());
    }

    pub fn jump_to_today(&mut self) {
        self.show_month(Some(MonthId::from_date(self.today)));
        self.cursor = self.today.day();
    }

    pub fn cycle_selected(&mut self) {
        self.notice = match self.service.cycle_day(self.month, self.cursor, self.settings.pattern) {
            Ok(Some(_)) => None,
            Ok(None) => Some(format!("Day {} is not a working day.", self.cursor)),
            Err(e) => Some(format!("Error: {}", e)),
        };
        self.reload();
    }

    pub fn toggle_pattern(&mut self) {
        self.settings.pattern = self.settings.pattern.toggle();
        self.stored.pattern = self.settings.pattern;
        self.persist_settings();
        self.reload();
    }

    pub fn toggle_holidays(&mut self) {
        self.settings.include_holidays = !self.settings.include_holidays;
        self.stored.include_holidays = self.settings.include_holidays;
        self.persist_settings();
        self.reload();
    }

    pub fn nudge_percent(&mut self, delta: i32) {
        self.settings.nudge_percent(delta);
        self.stored.percent = self.settings.percent;
        self.persist_settings();
        self.reload();
    }

    pub fn reset_month(&mut self) {
        self.notice = match self.service.reset_month(self.month) {
            Ok(()) => Some(format!("Cleared {}.", self.month.label())),
            Err(e) => Some(format!("Error: {}", e)),
        };
        self.reload();
    }
}
