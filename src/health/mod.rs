//! Startup self-tests
//!
//! Each subsystem the launcher needs before opening a window gets a
//! [`SystemCheck`]. The runner collects results into a report that the
//! binary prints when `startup_checks` is enabled.
//!
//! # Example
//!
//! ```no_run
//! use game_portal::health::{HealthCheckRunner, checks::*};
//!
//! let report = HealthCheckRunner::new()
//!     .add_check(ConfigCheck::new())
//!     .add_check(CatalogCheck::new())
//!     .add_check(BuildInfoCheck::new())
//!     .run();
//!
//! if report.is_healthy() {
//!     println!("Ready to launch");
//! }
//! ```

pub mod check;
pub mod checks;
pub mod reporter;
pub mod runner;

pub use check::{CheckResult, CheckStatus, Finding, SystemCheck};
pub use reporter::{format_report, print_report};
pub use runner::{HealthCheckReport, HealthCheckRunner};

use crate::assets::AssetService;

/// Runs every built-in check against `assets`
pub fn run_all_checks(assets: &AssetService) -> HealthCheckReport {
    HealthCheckRunner::new()
        .add_check(checks::ConfigCheck::new())
        .add_check(checks::CatalogCheck::new())
        .add_check(checks::AssetCheck::new(assets.clone()))
        .add_check(checks::MenuRenderCheck::new(assets.clone()))
        .add_check(checks::BuildInfoCheck::new())
        .run()
}
