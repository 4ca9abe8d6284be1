//! Application configuration
//!
//! Supports multiple profiles (debug, release) with different settings.
//! Every field has a default, so a missing profile file is not an error.

use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::menu::lifecycle::LaunchFailurePolicy;

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Whether to enable vsync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { vsync: true }
    }
}

/// Where images are loaded from
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Assets directory; relative paths are resolved next to the executable,
    /// then against the current directory
    pub dir: PathBuf,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("assets"),
        }
    }
}

/// Launcher behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    /// Frame rate the menu is throttled to
    pub target_fps: u32,
    /// What happens when a game fails to start or crashes with an error
    pub launch_failure: LaunchFailurePolicy,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            target_fps: 60,
            launch_failure: LaunchFailurePolicy::Abort,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `RUST_LOG` is not set
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// The active profile (debug, release, etc.)
    pub profile: String,
    /// Window configuration
    pub window: WindowConfig,
    /// Asset location
    pub assets: AssetConfig,
    /// Launcher behaviour
    pub launcher: LauncherConfig,
    /// Logging
    pub logging: LoggingConfig,
    /// Whether to run and print the health checks before opening the window
    pub startup_checks: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            profile: "release".to_string(),
            window: WindowConfig::default(),
            assets: AssetConfig::default(),
            launcher: LauncherConfig::default(),
            logging: LoggingConfig::default(),
            startup_checks: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration based on the specified profile
    ///
    /// Profiles are loaded from config files in the following order:
    /// 1. config/{profile}.toml (profile-specific configuration)
    /// 2. Environment variables with prefix APP_ (e.g., APP_LAUNCHER__TARGET_FPS=30)
    ///
    /// Config files are searched for in:
    /// 1. Next to the executable (target/debug/config or target/release/config)
    /// 2. In the current directory (./config)
    pub fn load(profile: &str) -> Result<Self, ConfigError> {
        match Self::find_config_dir() {
            Some(dir) => Self::load_from_dir(&dir, profile),
            None => Self::load_from_dir(&PathBuf::from("config"), profile),
        }
    }

    /// Loads `profile` from a specific config directory
    pub fn load_from_dir(dir: &std::path::Path, profile: &str) -> Result<Self, ConfigError> {
        let profile_path = dir.join(profile);

        let config = Config::builder()
            .add_source(File::from(profile_path.as_path()).required(false))
            // Use __ as separator for nested fields (e.g., APP_LOGGING__FILTER)
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override("profile", profile)?
            .build()?;

        config.try_deserialize()
    }

    /// Finds the config directory by searching in multiple locations
    fn find_config_dir() -> Option<PathBuf> {
        if let Ok(exe_path) = std::env::current_exe()
            && let Some(exe_dir) = exe_path.parent()
        {
            let config_dir = exe_dir.join("config");
            if config_dir.exists() {
                return Some(config_dir);
            }
        }

        let cwd_config = PathBuf::from("config");
        if cwd_config.exists() {
            return Some(cwd_config);
        }

        None
    }

    /// Loads configuration using the APP_PROFILE environment variable,
    /// defaulting to "release"
    pub fn load_from_env() -> Result<Self, ConfigError> {
        let profile = std::env::var("APP_PROFILE").unwrap_or_else(|_| "release".to_string());
        Self::load(&profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_profile_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from_dir(dir.path(), "nonexistent").unwrap();

        assert_eq!(config.profile, "nonexistent");
        assert_eq!(config.launcher.target_fps, 60);
        assert_eq!(config.launcher.launch_failure, LaunchFailurePolicy::Abort);
        assert!(config.window.vsync);
        assert!(!config.startup_checks);
    }

    #[test]
    fn test_profile_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("arcade.toml"),
            r#"
startup_checks = true

[launcher]
target_fps = 30
launch_failure = "return_to_menu"

[assets]
dir = "/opt/portal/assets"
"#,
        )
        .unwrap();

        let config = AppConfig::load_from_dir(dir.path(), "arcade").unwrap();

        assert_eq!(config.profile, "arcade");
        assert!(config.startup_checks);
        assert_eq!(config.launcher.target_fps, 30);
        assert_eq!(
            config.launcher.launch_failure,
            LaunchFailurePolicy::ReturnToMenu
        );
        assert_eq!(config.assets.dir, PathBuf::from("/opt/portal/assets"));
        assert_eq!(config.logging.filter, "info");
    }
}
