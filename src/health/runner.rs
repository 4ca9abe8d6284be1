//! Runs a suite of checks and tallies the results

use std::time::Instant;

use tracing::{debug, warn};

use super::check::{CheckResult, CheckStatus, SystemCheck};

/// Results of one suite run, in registration order
#[derive(Debug)]
pub struct HealthCheckReport {
    pub results: Vec<(String, CheckResult)>,
    pub total: usize,
    pub passed: usize,
    pub warned: usize,
    pub failed: usize,
}

impl HealthCheckReport {
    /// No check failed; warnings are allowed
    pub fn is_healthy(&self) -> bool {
        self.failed == 0
    }

    pub fn has_warnings(&self) -> bool {
        self.warned > 0
    }

    /// Result of the check called `name`
    pub fn result(&self, name: &str) -> Option<&CheckResult> {
        self.results
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, result)| result)
    }
}

/// Collects checks and runs them in order
#[derive(Default)]
pub struct HealthCheckRunner {
    checks: Vec<Box<dyn SystemCheck>>,
}

impl HealthCheckRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_check<C: SystemCheck + 'static>(mut self, check: C) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    pub fn run(self) -> HealthCheckReport {
        let mut report = HealthCheckReport {
            results: Vec::with_capacity(self.checks.len()),
            total: 0,
            passed: 0,
            warned: 0,
            failed: 0,
        };

        for check in self.checks {
            let started = Instant::now();
            let mut result = check.check();
            result.duration = started.elapsed();

            match result.status {
                CheckStatus::Pass => {
                    report.passed += 1;
                    debug!(check = check.name(), "Health check passed");
                }
                CheckStatus::Warn => {
                    report.warned += 1;
                    warn!(check = check.name(), message = %result.message, "Health check warning");
                }
                CheckStatus::Fail => {
                    report.failed += 1;
                    warn!(check = check.name(), message = %result.message, "Health check failed");
                }
            }

            report.results.push((check.name().to_string(), result));
        }

        report.total = report.results.len();
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str, CheckStatus);

    impl SystemCheck for Fixed {
        fn name(&self) -> &'static str {
            self.0
        }

        fn check(&self) -> CheckResult {
            CheckResult::new(self.1, "fixed")
        }
    }

    #[test]
    fn test_tallies() {
        let report = HealthCheckRunner::new()
            .add_check(Fixed("a", CheckStatus::Pass))
            .add_check(Fixed("b", CheckStatus::Warn))
            .run();
        assert_eq!((report.total, report.passed, report.warned), (2, 1, 1));
        assert!(report.is_healthy());
        assert!(report.has_warnings());

        let report = HealthCheckRunner::new()
            .add_check(Fixed("a", CheckStatus::Warn))
            .add_check(Fixed("b", CheckStatus::Fail))
            .run();
        assert!(!report.is_healthy());
        assert_eq!(report.result("b").unwrap().status, CheckStatus::Fail);
    }

    #[test]
    fn test_empty_suite_is_healthy() {
        let runner = HealthCheckRunner::new();
        assert!(runner.is_empty());
        let report = runner.run();
        assert!(report.is_healthy());
        assert!(!report.has_warnings());
    }
}
