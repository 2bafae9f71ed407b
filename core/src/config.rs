use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Zone roster in canonical display order. Names are unique and the
    /// order fixes the per-tick draw order for the whole run.
    pub zones: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct ZonesFile {
    zones: Vec<String>,
}

impl SimConfig {
    /// Load a roster from a JSON file shaped {"zones": ["Zone 1", ...]}.
    /// In tests, use SimConfig::default_test().
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let file: ZonesFile = serde_json::from_str(&content)?;
        anyhow::ensure!(!file.zones.is_empty(), "zone roster is empty");
        let mut seen = HashSet::new();
        for name in &file.zones {
            anyhow::ensure!(seen.insert(name.as_str()), "duplicate zone name: {name}");
        }
        Ok(Self { zones: file.zones })
    }

    /// The reference five-zone roster, for unit tests and default runs.
    pub fn default_test() -> Self {
        Self {
            zones: (1..=5).map(|i| format!("Zone {i}")).collect(),
        }
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::default_test()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn write_roster(name: &str, json: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}_{name}", std::process::id()));
        fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn load_keeps_the_file_order() {
        let path = write_roster(
            "roster_valid.json",
            r#"{ "zones": ["Harbor", "Old Town", "Airport"] }"#,
        );
        let config = SimConfig::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.zones, vec!["Harbor", "Old Town", "Airport"]);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn load_rejects_an_empty_roster() {
        let path = write_roster("roster_empty.json", r#"{ "zones": [] }"#);
        let err = SimConfig::load(path.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("empty"), "unexpected error: {err}");
        let _ = fs::remove_file(path);
    }

    #[test]
    fn load_rejects_duplicate_zone_names() {
        let path = write_roster(
            "roster_dupes.json",
            r#"{ "zones": ["Zone 1", "Zone 2", "Zone 1"] }"#,
        );
        let err = SimConfig::load(path.to_str().unwrap()).unwrap_err();
        assert!(
            err.to_string().contains("duplicate zone name: Zone 1"),
            "unexpected error: {err}"
        );
        let _ = fs::remove_file(path);
    }

    #[test]
    fn load_reports_an_unreadable_path() {
        let err = SimConfig::load("/nonexistent/roster.json").unwrap_err();
        assert!(err.to_string().contains("Cannot read"), "unexpected error: {err}");
    }
}
