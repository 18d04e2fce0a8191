use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use time::Weekday;
use timegrid::ControllerSettings;

use crate::week::DayWindow;

const APP_DIR: &str = "timegrid-tui";

/// Weekday the timesheet week starts on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    Monday,
    Tuesday,
    Wednesday,
    #[default]
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl WeekStart {
    pub fn weekday(self) -> Weekday {
        match self {
            WeekStart::Monday => Weekday::Monday,
            WeekStart::Tuesday => Weekday::Tuesday,
            WeekStart::Wednesday => Weekday::Wednesday,
            WeekStart::Thursday => Weekday::Thursday,
            WeekStart::Friday => Weekday::Friday,
            WeekStart::Saturday => Weekday::Saturday,
            WeekStart::Sunday => Weekday::Sunday,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimegridConfig {
    /// First visible minute of the day grid, e.g. 420 for 07:00
    pub day_start: u32,
    /// End of the visible window (exclusive), e.g. 1080 for 18:00
    pub day_end: u32,
    pub slot_minutes: u32,
    pub week_start: WeekStart,
    /// Log file path. Defaults to `timegrid.log` next to the config file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    pub controller: ControllerSettings,
}

impl Default for TimegridConfig {
    fn default() -> Self {
        Self {
            day_start: 7 * 60,
            day_end: 18 * 60,
            slot_minutes: 30,
            week_start: WeekStart::default(),
            log_file: None,
            controller: ControllerSettings::default(),
        }
    }
}

impl TimegridConfig {
    pub fn config_dir() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join(APP_DIR))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load config from disk. Returns default config if file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(path, raw)
            .with_context(|| format!("Failed to write config at {}", path.display()))?;
        Ok(())
    }

    pub fn log_path(&self) -> Result<PathBuf> {
        match &self.log_file {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join("timegrid.log")),
        }
    }

    /// The visible day window, with nonsensical values pulled back into range.
    pub fn window(&self) -> DayWindow {
        DayWindow::new(self.day_start, self.day_end, self.slot_minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use timegrid::HidePolicy;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = TimegridConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, TimegridConfig::default());
        assert_eq!(config.week_start.weekday(), Weekday::Thursday);
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
day_start = 480
week_start = "monday"

[controller]
toast_delay_ms = 3500
toast_policy = "independent"
"#,
        )
        .unwrap();

        let config = TimegridConfig::load_from(&path).unwrap();

        assert_eq!(config.day_start, 480);
        assert_eq!(config.day_end, 1080);
        assert_eq!(config.week_start, WeekStart::Monday);
        assert_eq!(config.controller.toast_delay_ms, 3500);
        assert_eq!(config.controller.toast_policy, HidePolicy::Independent);
        assert_eq!(config.controller.default_slot_interval, 30);
    }

    #[test]
    fn saved_config_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = TimegridConfig {
            slot_minutes: 15,
            week_start: WeekStart::Sunday,
            ..Default::default()
        };

        config.save_to(&path).unwrap();

        assert_eq!(TimegridConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "day_start = \"early\"").unwrap();

        let err = TimegridConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn explicit_log_file_wins() {
        let config = TimegridConfig {
            log_file: Some(PathBuf::from("/tmp/grid.log")),
            ..Default::default()
        };
        assert_eq!(config.log_path().unwrap(), PathBuf::from("/tmp/grid.log"));
    }
}
