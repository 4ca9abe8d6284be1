//! Terminal rendering of health reports

use colored::Colorize;
use tabled::builder::Builder;
use tabled::settings::object::{Columns, Rows};
use tabled::settings::{Alignment, Modify, Style};

use super::runner::HealthCheckReport;

/// Report table followed by a one-line verdict
pub fn format_report(report: &HealthCheckReport) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Check", "Status", "Time", "Result"]);

    for (name, result) in &report.results {
        builder.push_record([
            name.clone(),
            result.status.colored(),
            format!("{:.1?}", result.duration),
            result.message.clone(),
        ]);
    }

    let mut table = builder.build();
    table
        .with(Style::modern_rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .with(Modify::new(Columns::one(1)).with(Alignment::center()));

    format!("{table}\n{}", verdict(report))
}

fn verdict(report: &HealthCheckReport) -> String {
    let counts = format!(
        "{} checks: {} passed, {} warned, {} failed",
        report.total, report.passed, report.warned, report.failed
    );

    if !report.is_healthy() {
        format!("{} ({counts})", "UNHEALTHY".red().bold())
    } else if report.has_warnings() {
        format!("{} ({counts})", "HEALTHY with warnings".yellow().bold())
    } else {
        format!("{} ({counts})", "HEALTHY".green().bold())
    }
}

/// Prints the report and the details of every check that has any
pub fn print_report(report: &HealthCheckReport) {
    println!("{}", format_report(report));

    for (name, result) in &report.results {
        if result.details.is_empty() {
            continue;
        }
        println!("\n{}", name.bold());
        for line in &result.details {
            println!("{line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::check::{CheckResult, CheckStatus, SystemCheck};
    use crate::health::runner::HealthCheckRunner;

    struct Named(&'static str, CheckStatus);

    impl SystemCheck for Named {
        fn name(&self) -> &'static str {
            self.0
        }

        fn check(&self) -> CheckResult {
            CheckResult::new(self.1, "all good")
        }
    }

    #[test]
    fn test_report_lists_every_check() {
        colored::control::set_override(false);
        let report = HealthCheckRunner::new()
            .add_check(Named("Catalog", CheckStatus::Pass))
            .add_check(Named("Assets", CheckStatus::Warn))
            .run();

        let text = format_report(&report);
        assert!(text.contains("Catalog"));
        assert!(text.contains("Assets"));
        assert!(text.contains("WARN"));
        assert!(text.contains("HEALTHY with warnings"));
    }
}
