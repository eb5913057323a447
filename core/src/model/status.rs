use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::input::expand_key;

/// Sparse per-month status entries keyed by day of month. Absent days are `Unset`.
pub type StatusMap = BTreeMap<u32, DayStatus>;

/// Labels older data used for `Excluded`.
pub const LEGACY_EXCLUDED_LABELS: [&str; 2] = ["leave", "pto"];

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    #[default]
    Unset,
    In,
    Out,
    #[serde(alias = "leave", alias = "pto")]
    Excluded,
}

impl DayStatus {
    /// Unset -> In -> Out -> Excluded -> Unset
    pub fn next(self) -> Self {
        match self {
            DayStatus::Unset => DayStatus::In,
            DayStatus::In => DayStatus::Out,
            DayStatus::Out => DayStatus::Excluded,
            DayStatus::Excluded => DayStatus::Unset,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DayStatus::Unset => "unset",
            DayStatus::In => "in",
            DayStatus::Out => "out",
            DayStatus::Excluded => "excluded",
        }
    }

    /// Parses a stored label exactly, including legacy exclusion labels.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "" | "unset" => Some(DayStatus::Unset),
            "in" => Some(DayStatus::In),
            "out" => Some(DayStatus::Out),
            "excluded" | "leave" | "pto" => Some(DayStatus::Excluded),
            _ => None,
        }
    }

    pub fn is_legacy_label(label: &str) -> bool {
        LEGACY_EXCLUDED_LABELS.contains(&label.trim().to_lowercase().as_str())
    }
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// User input: accepts unambiguous prefixes ("i", "o", "ex") and "clear".
impl FromStr for DayStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let candidates = ["unset", "clear", "in", "out", "excluded", "leave", "pto"];
        let key = expand_key(&s.trim().to_lowercase(), &candidates)?;
        match key.as_str() {
            "clear" => Ok(DayStatus::Unset),
            other => DayStatus::from_label(other).ok_or_else(|| anyhow!("Unknown status: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_cycles_through_all_states() {
        let mut status = DayStatus::Unset;
        let mut seen = Vec::new();
        for _ in 0..4 {
            status = status.next();
            seen.push(status);
        }
        assert_eq!(
            seen,
            vec![DayStatus::In, DayStatus::Out, DayStatus::Excluded, DayStatus::Unset]
        );
    }

    #[test]
    fn test_from_label_maps_legacy_labels() {
        assert_eq!(DayStatus::from_label("leave"), Some(DayStatus::Excluded));
        assert_eq!(DayStatus::from_label("PTO"), Some(DayStatus::Excluded));
        assert_eq!(DayStatus::from_label("excluded"), Some(DayStatus::Excluded));
        assert_eq!(DayStatus::from_label(""), Some(DayStatus::Unset));
        assert_eq!(DayStatus::from_label("wfh"), None);

        assert!(DayStatus::is_legacy_label("leave"));
        assert!(!DayStatus::is_legacy_label("excluded"));
    }

    #[test]
    fn test_parse_user_input_prefixes() {
        assert_eq!("i".parse::<DayStatus>().unwrap(), DayStatus::In);
        assert_eq!("o".parse::<DayStatus>().unwrap(), DayStatus::Out);
        assert_eq!("ex".parse::<DayStatus>().unwrap(), DayStatus::Excluded);
        assert_eq!("clear".parse::<DayStatus>().unwrap(), DayStatus::Unset);
        assert_eq!("Unset".parse::<DayStatus>().unwrap(), DayStatus::Unset);
        // "e" is unique today, "x" is not a prefix of anything
        assert_eq!("e".parse::<DayStatus>().unwrap(), DayStatus::Excluded);
        assert!("x".parse::<DayStatus>().is_err());
    }

    #[test]
    fn test_serde_uses_canonical_labels() {
        assert_eq!(serde_json::to_string(&DayStatus::Excluded).unwrap(), "\"excluded\"");
        let legacy: DayStatus = serde_json::from_str("\"leave\"").unwrap();
        assert_eq!(legacy, DayStatus::Excluded);
    }
}
