//! User configuration
//!
//! Read once at startup from a TOML file in the user's config directory:
//! - Linux: ~/.config/portfolio-studio/config.toml
//! - macOS: ~/Library/Application Support/portfolio-studio/config.toml
//! - Windows: %APPDATA%\portfolio-studio\config.toml
//!
//! Every field has a default, so a missing file or a partial file is fine.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::delivery::PLACEHOLDER_PUBLIC_KEY;
use crate::error::ConfigError;
use crate::state::gallery::TransitionTiming;

/// Environment variable overriding `delivery.public_key`
pub const PUBLIC_KEY_ENV: &str = "PORTFOLIO_EMAILJS_PUBLIC_KEY";

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub delivery: DeliveryConfig,
    pub animation: AnimationConfig,
    pub media: MediaConfig,
}

/// Contact form delivery settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DeliveryConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    /// Fixed destination of every contact message
    pub destination: String,
    /// How long the success/error view stays up
    pub status_display_secs: u64,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            endpoint: String::from("https://api.emailjs.com/api/v1.0/email/send"),
            service_id: String::from("service_portfolio"),
            template_id: String::from("template_contact"),
            public_key: String::from(PLACEHOLDER_PUBLIC_KEY),
            destination: String::from("alleabdo301@gmail.com"),
            status_display_secs: 4,
        }
    }
}

impl DeliveryConfig {
    pub fn status_display(&self) -> Duration {
        Duration::from_secs(self.status_display_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub transition_ms: u64,
    pub stagger_ms: u64,
    pub slideshow_secs: u64,
    /// Hero shape rotation in radians per second
    pub hero_speed: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            transition_ms: 300,
            stagger_ms: 50,
            slideshow_secs: 5,
            hero_speed: 0.3,
        }
    }
}

impl AnimationConfig {
    pub fn transition(&self) -> TransitionTiming {
        TransitionTiming {
            duration: Duration::from_millis(self.transition_ms),
            stagger: Duration::from_millis(self.stagger_ms),
        }
    }

    /// Slideshow interval, never shorter than one second
    pub fn slideshow_interval(&self) -> Duration {
        Duration::from_secs(self.slideshow_secs.max(1))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MediaConfig {
    /// Fetch and cache project thumbnails
    pub thumbnails: bool,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self { thumbnails: true }
    }
}

impl AppConfig {
    /// Load from the default location, falling back to defaults on any problem
    pub fn load() -> Self {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => Self::from_file(&path).unwrap_or_else(|err| {
                tracing::warn!("⚠️  {}; using default configuration", err);
                Self::default()
            }),
            _ => Self::default(),
        };

        if let Ok(key) = std::env::var(PUBLIC_KEY_ENV) {
            if !key.trim().is_empty() {
                config.delivery.public_key = key;
            }
        }

        config
    }

    /// Get the path where the config file is expected
    pub fn config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("portfolio-studio");
        path.push("config.toml");
        Some(path)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!("📁 Configuration loaded from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[delivery]\npublic_key = \"abc123\"\n\n[animation]\nslideshow_secs = 8").unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.delivery.public_key, "abc123");
        assert_eq!(config.delivery.status_display_secs, 4);
        assert_eq!(config.animation.slideshow_secs, 8);
        assert_eq!(config.animation.transition_ms, 300);
        assert!(config.media.thumbnails);
    }

    #[test]
    fn test_malformed_file_reports_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[delivery\nendpoint = 3").unwrap();

        let err = AppConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_file_reports_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::from_file(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_slideshow_interval_has_floor() {
        let animation = AnimationConfig {
            slideshow_secs: 0,
            ..AnimationConfig::default()
        };
        assert_eq!(animation.slideshow_interval(), Duration::from_secs(1));
    }
}
