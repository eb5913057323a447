use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::model::month::MonthId;
use crate::model::pattern::WorkPattern;

pub const DEFAULT_PERCENT: u32 = 50;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Last viewed month.
    #[serde(default)]
    pub month: Option<MonthId>,
    #[serde(default)]
    pub pattern: WorkPattern,
    #[serde(default = "default_percent", alias = "pct")]
    pub percent: u32,
    #[serde(default = "default_include_holidays")]
    pub include_holidays: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            month: None,
            pattern: WorkPattern::default(),
            percent: DEFAULT_PERCENT,
            include_holidays: true,
        }
    }
}

impl Settings {
    pub fn set_percent(&mut self, percent: u32) -> Result<()> {
        self.percent = validate_percent(percent)?;
        Ok(())
    }

    /// Moves the target by `delta`, clamped to 1..=100.
    pub fn nudge_percent(&mut self, delta: i32) {
        let next = (self.percent as i32 + delta).clamp(1, 100);
        self.percent = next as u32;
    }
}

pub fn validate_percent(percent: u32) -> Result<u32> {
    if percent == 0 || percent > 100 {
        return Err(anyhow!("Target percentage must be between 1 and 100, got {}", percent));
    }
    Ok(percent)
}

fn default_percent() -> u32 {
    DEFAULT_PERCENT
}

fn default_include_holidays() -> bool {
    true
}
