use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use jt_service::Latency;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE: &str = "jobtrack.toml";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub service: ServiceConfig,
    pub account: AccountConfig,
    pub notifications: NotificationConfig,
}

/// Knobs for the mock data service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub list_latency_ms: u64,
    pub get_latency_ms: u64,
    pub write_latency_ms: u64,
    /// Start from the built-in demo data instead of an empty store.
    pub seed: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        let latency = Latency::default();
        Self {
            list_latency_ms: latency.list.as_millis() as u64,
            get_latency_ms: latency.get.as_millis() as u64,
            write_latency_ms: latency.write.as_millis() as u64,
            seed: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountConfig {
    pub name: String,
    pub email: String,
    pub theme: Theme,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            name: "User".to_string(),
            email: "user@example.com".to_string(),
            theme: Theme::Light,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    System,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        })
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            other => Err(format!("unknown theme: {other}")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub application_updates: bool,
    pub interviews: bool,
    pub offers: bool,
    pub rejections: bool,
    pub reminders: bool,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            application_updates: true,
            interviews: true,
            offers: true,
            rejections: true,
            reminders: true,
        }
    }
}

/// Edits made on the settings screen. `None` keeps the current value.
#[derive(Clone, Debug, Default)]
pub struct SettingsUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub theme: Option<Theme>,
    pub application_updates: Option<bool>,
    pub interviews: Option<bool>,
    pub offers: Option<bool>,
    pub rejections: Option<bool>,
    pub reminders: Option<bool>,
}

impl SettingsUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.theme.is_none()
            && self.application_updates.is_none()
            && self.interviews.is_none()
            && self.offers.is_none()
            && self.rejections.is_none()
            && self.reminders.is_none()
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        let s =
            std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        let cfg: Config =
            toml::from_str(&s).with_context(|| format!("parse {}", path.display()))?;
        Ok(cfg)
    }

    /// Like `load_from`, but a missing file means defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).ok();
        }
        let s = toml::to_string_pretty(self).with_context(|| "serialize toml")?;
        std::fs::write(path, s).with_context(|| format!("write {}", path.display()))?;
        Ok(())
    }

    /// Merges account and notification edits. `[service]` is never touched.
    pub fn apply_settings(&mut self, update: SettingsUpdate) {
        fn set<T>(slot: &mut T, value: Option<T>) {
            if let Some(v) = value {
                *slot = v;
            }
        }
        set(&mut self.account.name, update.name);
        set(&mut self.account.email, update.email);
        set(&mut self.account.theme, update.theme);
        let n = &mut self.notifications;
        set(&mut n.application_updates, update.application_updates);
        set(&mut n.interviews, update.interviews);
        set(&mut n.offers, update.offers);
        set(&mut n.rejections, update.rejections);
        set(&mut n.reminders, update.reminders);
    }

    pub fn default_path(dir: &Path) -> PathBuf {
        dir.join(DEFAULT_CONFIG_FILE)
    }

    pub fn latency(&self) -> Latency {
        Latency {
            list: Duration::from_millis(self.service.list_latency_ms),
            get: Duration::from_millis(self.service.get_latency_ms),
            write: Duration::from_millis(self.service.write_latency_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_means_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_or_default(&Config::default_path(dir.path())).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.latency(), Latency::default());
        assert!(cfg.service.seed);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobtrack.toml");
        std::fs::write(
            &path,
            "[service]\nlist_latency_ms = 0\nseed = false\n\n[account]\ntheme = \"dark\"\n",
        )
        .unwrap();

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.service.list_latency_ms, 0);
        assert_eq!(cfg.service.write_latency_ms, 500);
        assert!(!cfg.service.seed);
        assert_eq!(cfg.account.theme, Theme::Dark);
        assert_eq!(cfg.account.name, "User");
        assert!(cfg.notifications.reminders);
    }

    #[test]
    fn save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("jobtrack.toml");
        let mut cfg = Config::default();
        cfg.account.email = "me@example.com".into();
        cfg.notifications.offers = false;
        cfg.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), cfg);
    }

    #[test]
    fn saved_settings_survive_a_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = Config::default_path(dir.path());
        let mut cfg = Config::load_or_default(&path).unwrap();
        cfg.service.seed = false;

        let update = SettingsUpdate {
            name: Some("Ada".into()),
            theme: Some("Dark".parse().unwrap()),
            reminders: Some(false),
            ..SettingsUpdate::default()
        };
        assert!(!update.is_empty());
        cfg.apply_settings(update);
        cfg.save_to(&path).unwrap();

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.account.name, "Ada");
        assert_eq!(reloaded.account.email, "user@example.com");
        assert_eq!(reloaded.account.theme, Theme::Dark);
        assert!(!reloaded.notifications.reminders);
        assert!(reloaded.notifications.offers);
        assert!(!reloaded.service.seed, "service section is kept as it was");
    }

    #[test]
    fn empty_update_changes_nothing() {
        let update = SettingsUpdate::default();
        assert!(update.is_empty());
        let mut cfg = Config::default();
        cfg.apply_settings(update);
        assert_eq!(cfg, Config::default());
        assert!("neon".parse::<Theme>().is_err());
    }

    #[test]
    fn unknown_theme_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobtrack.toml");
        std::fs::write(&path, "[account]\ntheme = \"neon\"\n").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
