use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;
use anyhow::Result;
use serde_json;
use tracing::{debug, warn};

use crate::model::settings::{validate_percent, Settings, DEFAULT_PERCENT};
use crate::repository::resolve_base_dir;

const SETTINGS_FILE_NAME: &str = "settings.json";

#[derive(Clone)]
pub struct FileSettingsRepository {
    file_path: PathBuf,
}

impl FileSettingsRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut path = resolve_base_dir(base_dir)?;
        fs::create_dir_all(&path)?;
        path.push(SETTINGS_FILE_NAME);
        Ok(FileSettingsRepository { file_path: path })
    }

    /// Stored settings, or defaults when the file is missing or unreadable.
    pub fn load(&self) -> Result<Settings> {
        if !self.file_path.exists() {
            return Ok(Settings::default());
        }
        let file = File::open(&self.file_path)?;
        let reader = BufReader::new(file);
        match serde_json::from_reader::<_, Settings>(reader) {
            Ok(mut settings) => {
                if let Err(e) = validate_percent(settings.percent) {
                    warn!(path = %self.file_path.display(), error = %e, "ignoring stored target percentage");
                    settings.percent = DEFAULT_PERCENT;
                }
                debug!(?settings, "loaded settings");
                Ok(settings)
            }
            Err(e) => {
                warn!(path = %self.file_path.display(), error = %e, "ignoring unreadable settings");
                Ok(Settings::default())
            }
        }
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, settings)?;
        writer.flush()?;
        debug!(?settings, "saved settings");
        Ok(())
    }
}
