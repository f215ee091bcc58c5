// config.rs — Goal configuration.
//
// The goal is a single positive integer read from checkin.toml. A
// missing or unparseable file, or a non-positive value, falls back to
// the default of 50 — the store only ever sees a validated Goal, so a
// division by zero in the progress computation is unrepresentable.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// A validated-positive check-in goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Goal(u32);

impl Goal {
    /// The default goal when configuration is absent or invalid.
    pub const DEFAULT: Goal = Goal(50);

    /// Validate a raw configured value. Anything below 1 (or past u32
    /// range) yields the default.
    pub fn new(raw: i64) -> Goal {
        match u32::try_from(raw) {
            Ok(n) if n >= 1 => Goal(n),
            _ => Goal::DEFAULT,
        }
    }

    /// The goal value, always >= 1.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for Goal {
    fn default() -> Self {
        Goal::DEFAULT
    }
}

/// Top-level configuration from checkin.toml.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInConfig {
    /// Target total check-in count. Default: 50.
    #[serde(default = "default_goal")]
    pub goal: i64,
}

impl Default for CheckInConfig {
    fn default() -> Self {
        Self {
            goal: default_goal(),
        }
    }
}

fn default_goal() -> i64 {
    50
}

impl CheckInConfig {
    /// Load config from a checkin.toml file.
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to load config, returning defaults if the file is missing or
    /// unparseable.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// The validated goal.
    pub fn goal(&self) -> Goal {
        Goal::new(self.goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn goal_validates_positive() {
        assert_eq!(Goal::new(80).get(), 80);
        assert_eq!(Goal::new(1).get(), 1);
    }

    #[test]
    fn goal_rejects_non_positive() {
        assert_eq!(Goal::new(0), Goal::DEFAULT);
        assert_eq!(Goal::new(-5), Goal::DEFAULT);
        assert_eq!(Goal::new(i64::MAX), Goal::DEFAULT);
    }

    #[test]
    fn missing_file_yields_default_goal() {
        let dir = tempdir().unwrap();
        let config = CheckInConfig::load_or_default(&dir.path().join("checkin.toml"));
        assert_eq!(config.goal(), Goal::DEFAULT);
    }

    #[test]
    fn configured_goal_is_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("checkin.toml");
        fs::write(&path, "goal = 80\n").unwrap();

        let config = CheckInConfig::load_or_default(&path);
        assert_eq!(config.goal().get(), 80);
    }

    #[test]
    fn non_positive_configured_goal_falls_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("checkin.toml");
        fs::write(&path, "goal = 0\n").unwrap();

        let config = CheckInConfig::load_or_default(&path);
        assert_eq!(config.goal(), Goal::DEFAULT);
    }

    #[test]
    fn unparseable_file_falls_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("checkin.toml");
        fs::write(&path, "goal = \"not a number").unwrap();

        let config = CheckInConfig::load_or_default(&path);
        assert_eq!(config.goal(), Goal::DEFAULT);
    }
}
