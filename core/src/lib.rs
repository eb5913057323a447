pub mod model;
pub mod repository;
pub mod input;
pub mod time;
pub mod holidays;
pub mod eligibility;
pub mod service;
pub mod usecase;

pub use model::month::MonthId;
pub use model::pattern::WorkPattern;
pub use model::settings::Settings;
pub use model::status::{DayStatus, StatusMap};
pub use model::summary::{DayClass, ElapsedSplit, ProgressSummary};
pub use holidays::{bank_holidays, holidays_for_year, BankHoliday, HolidaySet, ObservedHoliday};
pub use eligibility::{classify_month, evaluate, evaluate_as_of, required_days};
pub use repository::{FileSettingsRepository, FileStatusRepository, StatusRepository};
pub use input::{apply_settings_args, expand_key, parse_args, ParsedInput};
pub use time::{parse_day, parse_month};
pub use service::dto::{ImportReport, MonthHistory, MonthReport};
pub use service::import_service::ImportService;
pub use service::tracker_service::TrackerService;
pub use usecase::history::HistoryUseCase;
