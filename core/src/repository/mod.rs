pub mod file;
pub mod settings;
pub mod traits;

use std::path::PathBuf;
use anyhow::{anyhow, Result};

// Re-export
pub use file::{decode_days, DecodedDays, FileStatusRepository};
pub use settings::FileSettingsRepository;
pub use traits::StatusRepository;

const DEFAULT_DIR_NAME: &str = ".officeday";

/// `base_dir` when given, otherwise `~/.officeday`.
pub fn resolve_base_dir(base_dir: Option<PathBuf>) -> Result<PathBuf> {
    match base_dir {
        Some(dir) => Ok(dir),
        None => {
            let home_dir = dirs::home_dir()
                .ok_or_else(|| anyhow!("Could not determine home directory"))?;
            Ok(home_dir.join(DEFAULT_DIR_NAME))
        }
    }
}
