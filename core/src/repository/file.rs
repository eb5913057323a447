use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use serde_json;
use tracing::{debug, info, warn};

use crate::model::month::MonthId;
use crate::model::status::{DayStatus, StatusMap};
use crate::repository::resolve_base_dir;
use crate::repository::traits::StatusRepository;

const FILE_PREFIX: &str = "status_";

/// On-disk shape of one month: `{"month": "2025-03", "days": {"3": "in"}}`.
#[derive(Serialize, Deserialize, Debug, Clone)]
struct StoredMonth {
    month: MonthId,
    #[serde(default)]
    days: BTreeMap<String, String>,
}

/// Result of decoding raw `day -> label` entries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DecodedDays {
    pub statuses: StatusMap,
    /// Entries that used a legacy exclusion label.
    pub migrated: usize,
    /// Entries dropped for a bad day number or unknown label.
    pub dropped: usize,
}

/// Decodes stored `day -> label` pairs for `month`.
///
/// Day numbers the month does not have and unknown labels are dropped.
/// Legacy exclusion labels become `Excluded`.
pub fn decode_days<'a, I>(month: MonthId, raw: I) -> DecodedDays
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut decoded = DecodedDays::default();
    for (key, label) in raw {
        let day = match key.trim().parse::<u32>() {
            Ok(day) if month.date(day).is_some() => day,
            _ => {
                debug!(%month, key, "dropping entry outside the month");
                decoded.dropped += 1;
                continue;
            }
        };
        match DayStatus::from_label(label) {
            Some(DayStatus::Unset) => {}
            Some(status) => {
                if DayStatus::is_legacy_label(label) {
                    decoded.migrated += 1;
                }
                decoded.statuses.insert(day, status);
            }
            None => {
                warn!(%month, day, label, "dropping unknown day status");
                decoded.dropped += 1;
            }
        }
    }
    decoded
}

fn encode_days(statuses: &StatusMap) -> BTreeMap<String, String> {
    statuses
        .iter()
        .filter(|(_, status)| **status != DayStatus::Unset)
        .map(|(day, status)| (day.to_string(), status.label().to_string()))
        .collect()
}

/// One JSON file per month under the data directory.
#[derive(Clone)]
pub struct FileStatusRepository {
    base_dir: PathBuf,
}

impl FileStatusRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let path = resolve_base_dir(base_dir)?;
        fs::create_dir_all(&path)?;
        Ok(Self { base_dir: path })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn month_path(&self, month: MonthId) -> PathBuf {
        let filename = format!("{}{:04}_{:02}.json", FILE_PREFIX, month.year(), month.month());
        self.base_dir.join(filename)
    }

    fn month_from_path(path: &Path) -> Option<MonthId> {
        if path.extension().and_then(|s| s.to_str()) != Some("json") {
            return None;
        }
        let stem = path.file_stem()?.to_str()?.strip_prefix(FILE_PREFIX)?;
        let (year, month) = stem.split_once('_')?;
        MonthId::new(year.parse().ok()?, month.parse().ok()?).ok()
    }

    fn read_month(&self, path: &Path) -> Result<StoredMonth> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let stored = serde_json::from_reader(reader)
            .map_err(|e| anyhow!("Could not read {}: {}", path.display(), e))?;
        Ok(stored)
    }

    fn write_month(&self, path: &Path, stored: &StoredMonth) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, stored)?;
        writer.flush()?;
        Ok(())
    }
}

impl StatusRepository for FileStatusRepository {
    fn load(&self, month: MonthId) -> Result<StatusMap> {
        let path = self.month_path(month);
        if !path.exists() {
            return Ok(StatusMap::new());
        }

        let stored = self.read_month(&path)?;
        if stored.month != month {
            warn!(expected = %month, found = %stored.month, "month file names a different month");
        }
        let decoded = decode_days(month, stored.days.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        debug!(%month, entries = decoded.statuses.len(), "loaded day statuses");

        if decoded.migrated > 0 {
            info!(%month, migrated = decoded.migrated, "rewriting legacy exclusion labels");
            if let Err(e) = self.save(month, &decoded.statuses) {
                warn!(%month, error = %e, "could not rewrite legacy labels, keeping file as is");
            }
        }
        Ok(decoded.statuses)
    }

    fn save(&self, month: MonthId, statuses: &StatusMap) -> Result<()> {
        let days = encode_days(statuses);
        if days.is_empty() {
            return self.clear(month);
        }
        let path = self.month_path(month);
        self.write_month(&path, &StoredMonth { month, days })?;
        debug!(%month, path = %path.display(), "saved day statuses");
        Ok(())
    }

    fn clear(&self, month: MonthId) -> Result<()> {
        let path = self.month_path(month);
        if path.exists() {
            fs::remove_file(&path)?;
            debug!(%month, "cleared day statuses");
        }
        Ok(())
    }

    fn months(&self) -> Result<Vec<MonthId>> {
        let mut months = Vec::new();
        if self.base_dir.exists() {
            for entry in fs::read_dir(&self.base_dir)? {
                let entry = entry?;
                if let Some(month) = Self::month_from_path(&entry.path()) {
                    months.push(month);
                }
            }
        }
        months.sort();
        Ok(months)
    }
}
