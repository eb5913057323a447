use std::collections::HashMap;
use anyhow::{anyhow, Result};
use chrono::NaiveDate;

use crate::model::settings::Settings;
use crate::time::parse_month;

#[derive(Debug, PartialEq)]
pub struct ParsedInput {
    pub words: Vec<String>,
    pub metadata: HashMap<String, String>,
}

/// Splits `key:value` pairs from free words.
pub fn parse_args(args: &[String]) -> ParsedInput {
    let mut words = Vec::new();
    let mut metadata = HashMap::new();

    for arg in args {
        if let Some((key, value)) = arg.split_once(':') {
            if !key.is_empty() {
                metadata.insert(key.to_string(), value.to_string());
                continue;
            }
        }
        words.push(arg.clone());
    }

    ParsedInput { words, metadata }
}

pub fn expand_key(key: &str, candidates: &[&str]) -> Result<String> {
    // 1. Exact match
    if candidates.contains(&key) {
        return Ok(key.to_string());
    }

    // 2. Prefix match
    let matches: Vec<&str> = candidates
        .iter()
        .filter(|&&c| !key.is_empty() && c.starts_with(key))
        .cloned()
        .collect();

    match matches.len() {
        1 => Ok(matches[0].to_string()),
        0 => Err(anyhow!("Unknown key: '{}'", key)),
        _ => Err(anyhow!("Ambiguous key: '{}' matches {:?}", key, matches)),
    }
}

pub const SETTINGS_KEYS: [&str; 4] = ["month", "pattern", "percent", "holidays"];

/// Applies `key:value` arguments such as `pat:all perc:60 hol:off` to `settings`.
/// Returns the expanded keys that were changed.
pub fn apply_settings_args(settings: &mut Settings, args: &[String], today: NaiveDate) -> Result<Vec<String>> {
    let parsed = parse_args(args);
    if let Some(word) = parsed.words.first() {
        return Err(anyhow!("Expected key:value, got '{}'", word));
    }

    let mut keys: Vec<_> = parsed.metadata.into_iter().collect();
    keys.sort();

    let mut changed = Vec::new();
    for (key, value) in keys {
        let key = expand_key(&key, &SETTINGS_KEYS)?;
        match key.as_str() {
            "month" => settings.month = Some(parse_month(&value, today)?),
            "pattern" => settings.pattern = value.parse()?,
            "percent" => {
                let percent: u32 = value
                    .trim_end_matches('%')
                    .parse()
                    .map_err(|_| anyhow!("Invalid percentage: '{}'", value))?;
                settings.set_percent(percent)?;
            }
            "holidays" => settings.include_holidays = parse_switch(&value)?,
            other => return Err(anyhow!("Unknown key: '{}'", other)),
        }
        changed.push(key);
    }
    Ok(changed)
}

pub fn parse_switch(input: &str) -> Result<bool> {
    match input.to_lowercase().as_str() {
        "on" | "yes" | "y" | "true" | "1" => Ok(true),
        "off" | "no" | "n" | "false" | "0" => Ok(false),
        _ => Err(anyhow!("Expected on/off, got '{}'", input)),
    }
}
