//! Build metadata

use crate::build_info;
use crate::health::check::{CheckResult, Finding, SystemCheck};

/// Reports what the binary was built from
#[derive(Default)]
pub struct BuildInfoCheck;

impl BuildInfoCheck {
    pub fn new() -> Self {
        Self
    }
}

impl SystemCheck for BuildInfoCheck {
    fn name(&self) -> &'static str {
        "Build Info"
    }

    fn check(&self) -> CheckResult {
        let git = if build_info::git_sha_short() == "unknown" {
            Finding::warn("Git commit unknown (not built from a checkout)")
        } else {
            Finding::ok(format!(
                "Git {} (dirty: {})",
                build_info::git_sha_short(),
                build_info::is_git_dirty()
            ))
        };

        let findings = vec![
            git,
            Finding::ok(format!("Built {}", build_info::BUILD_TIMESTAMP)),
            Finding::ok(format!(
                "Rustc {} ({})",
                build_info::RUSTC_SEMVER,
                build_info::RUSTC_CHANNEL
            )),
            Finding::ok(format!(
                "Target {} opt {}",
                build_info::CARGO_TARGET_TRIPLE,
                build_info::CARGO_OPT_LEVEL
            )),
        ];

        CheckResult::from_findings(findings, build_info::version_string())
    }
}
