//! Configuration profiles

use crate::app::AppConfig;
use crate::health::check::{CheckResult, Finding, SystemCheck};

/// Loads every shipped profile plus the environment-selected one
pub struct ConfigCheck {
    profiles: Vec<&'static str>,
}

impl ConfigCheck {
    pub fn new() -> Self {
        Self::with_profiles(vec!["debug", "release"])
    }

    pub fn with_profiles(profiles: Vec<&'static str>) -> Self {
        Self { profiles }
    }

    fn describe(config: &AppConfig) -> String {
        format!(
            "Profile '{}': {} fps, launch failure {:?}, assets in {}",
            config.profile,
            config.launcher.target_fps,
            config.launcher.launch_failure,
            config.assets.dir.display()
        )
    }
}

impl Default for ConfigCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for ConfigCheck {
    fn name(&self) -> &'static str {
        "Configuration"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Loads config profiles from files and APP_ environment variables")
    }

    fn check(&self) -> CheckResult {
        let mut findings: Vec<Finding> = self
            .profiles
            .iter()
            .map(|profile| match AppConfig::load(profile) {
                Ok(config) if config.launcher.target_fps == 0 => Finding::warn(format!(
                    "Profile '{profile}': target_fps is 0, frames will run at 1 fps"
                )),
                Ok(config) => Finding::ok(Self::describe(&config)),
                Err(e) => Finding::fail(format!("Profile '{profile}': {e}")),
            })
            .collect();

        findings.push(match AppConfig::load_from_env() {
            Ok(config) => Finding::ok(format!("Environment selects '{}'", config.profile)),
            Err(e) => Finding::warn(format!("Environment config: {e}")),
        });

        CheckResult::from_findings(findings, format!("{} profiles checked", self.profiles.len()))
    }
}
