use anyhow::{anyhow, Result};
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::model::month::MonthId;
use crate::model::settings::{validate_percent, Settings};
use crate::repository::{decode_days, StatusRepository};
use crate::service::dto::ImportReport;

/// Key prefix the browser tracker used in local storage.
pub const BROWSER_KEY_PREFIX: &str = "office50:";
const BROWSER_SETTINGS_KEY: &str = "settings";

/// Imports a dump of the browser tracker's local storage:
/// `{"office50:2025-03": "{\"3\":\"in\"}", "office50:settings": "{...}"}`.
///
/// Values may be JSON-encoded strings (as local storage holds them) or
/// plain objects. Imported days are merged over what is already stored.
pub struct ImportService<'a, R: StatusRepository> {
    repo: &'a R,
}

impl<'a, R: StatusRepository> ImportService<'a, R> {
    pub fn new(repo: &'a R) -> Self {
        Self { repo }
    }

    pub fn import_browser_export(&self, raw: &str) -> Result<ImportReport> {
        let root: Value = serde_json::from_str(raw).map_err(|e| anyhow!("Export is not valid JSON: {}", e))?;
        let entries = root
            .as_object()
            .ok_or_else(|| anyhow!("Export must be a JSON object of storage keys"))?;

        let mut report = ImportReport::default();
        let mut keys: Vec<_> = entries.keys().collect();
        keys.sort();

        for key in keys {
            let Some(name) = key.strip_prefix(BROWSER_KEY_PREFIX) else {
                warn!(key = %key, "skipping foreign storage key");
                continue;
            };
            let value = unwrap_stored(&entries[key.as_str()])?;

            if name == BROWSER_SETTINGS_KEY {
                let settings: Settings = serde_json::from_value(value)
                    .map_err(|e| anyhow!("Invalid settings in export: {}", e))?;
                validate_percent(settings.percent)?;
                report.settings = Some(settings);
                continue;
            }

            let month: MonthId = name.parse()?;
            let days = as_object(&value, key)?;
            self.import_month(month, days, &mut report)?;
        }

        info!(
            months = report.months.len(),
            days = report.days,
            migrated = report.migrated,
            "imported browser export"
        );
        Ok(report)
    }

    fn import_month(&self, month: MonthId, days: &Map<String, Value>, report: &mut ImportReport) -> Result<()> {
        let labels = days
            .iter()
            .filter_map(|(day, label)| label.as_str().map(|l| (day.as_str(), l)));
        let decoded = decode_days(month, labels);

        let mut statuses = self.repo.load(month)?;
        statuses.extend(decoded.statuses.iter().map(|(d, s)| (*d, *s)));
        self.repo.save(month, &statuses)?;

        report.months.push(month);
        report.days += decoded.statuses.len();
        report.migrated += decoded.migrated;
        report.dropped += decoded.dropped + days.values().filter(|v| !v.is_string()).count();
        Ok(())
    }
}

/// Local storage values are strings holding JSON.
fn unwrap_stored(value: &Value) -> Result<Value> {
    match value {
        Value::String(inner) => {
            serde_json::from_str(inner).map_err(|e| anyhow!("Stored value is not valid JSON: {}", e))
        }
        other => Ok(other.clone()),
    }
}

fn as_object<'v>(value: &'v Value, key: &str) -> Result<&'v Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| anyhow!("Expected an object of days for '{}'", key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::pattern::WorkPattern;
    use crate::model::status::{DayStatus, StatusMap};
    use crate::repository::FileStatusRepository;
    use tempfile::TempDir;

    fn repo() -> (TempDir, FileStatusRepository) {
        let dir = TempDir::new().unwrap();
        let repo = FileStatusRepository::new(Some(dir.path().to_path_buf())).unwrap();
        (dir, repo)
    }

    #[test]
    fn test_import_string_encoded_values() {
        let (_dir, repo) = repo();
        let raw = r#"{
            "office50:2025-03": "{\"3\":\"in\",\"4\":\"out\",\"5\":\"leave\"}",
            "office50:settings": "{\"month\":\"2025-03\",\"pattern\":\"all\",\"pct\":60}",
            "theme": "dark"
        }"#;

        let report = ImportService::new(&repo).import_browser_export(raw).unwrap();
        let march = MonthId::new(2025, 3).unwrap();
        assert_eq!(report.months, vec![march]);
        assert_eq!(report.days, 3);
        assert_eq!(report.migrated, 1);

        let settings = report.settings.unwrap();
        assert_eq!(settings.pattern, WorkPattern::AllDays);
        assert_eq!(settings.percent, 60);

        let stored = repo.load(march).unwrap();
        assert_eq!(stored.get(&5), Some(&DayStatus::Excluded));
    }

    #[test]
    fn test_import_merges_over_existing() {
        let (_dir, repo) = repo();
        let april = MonthId::new(2025, 4).unwrap();
        let existing: StatusMap = [(1, DayStatus::In), (2, DayStatus::In)].into_iter().collect();
        repo.save(april, &existing).unwrap();

        let raw = r#"{"office50:2025-04": {"2": "out", "31": "in", "3": 7}}"#;
        let report = ImportService::new(&repo).import_browser_export(raw).unwrap();
        assert_eq!(report.days, 1);
        assert_eq!(report.dropped, 2);

        let stored = repo.load(april).unwrap();
        assert_eq!(stored.get(&1), Some(&DayStatus::In));
        assert_eq!(stored.get(&2), Some(&DayStatus::Out));
        assert_eq!(stored.len(), 2);
    }

    #[test]
    fn test_import_rejects_malformed_export() {
        let (_dir, repo) = repo();
        let service = ImportService::new(&repo);
        assert!(service.import_browser_export("[]").is_err());
        assert!(service.import_browser_export("not json").is_err());
        assert!(service.import_browser_export(r#"{"office50:2025-13": {}}"#).is_err());
        assert!(service.import_browser_export(r#"{"office50:2025-03": "[1,2]"}"#).is_err());
        assert!(service.import_browser_export(r#"{"office50:settings": {"pct": 0}}"#).is_err());
    }
}
