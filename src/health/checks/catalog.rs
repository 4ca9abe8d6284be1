//! Catalog and button layout

use crate::app::window::{LAUNCHER_HEIGHT, LAUNCHER_WIDTH};
use crate::health::check::{CheckResult, Finding, SystemCheck};
use crate::menu::catalog::Catalog;
use crate::menu::layout::GridLayout;

/// Validates the built-in catalog and checks its grid fits the window
pub struct CatalogCheck {
    grid: GridLayout,
}

impl CatalogCheck {
    pub fn new() -> Self {
        Self {
            grid: GridLayout::LAUNCHER,
        }
    }
}

impl Default for CatalogCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for CatalogCheck {
    fn name(&self) -> &'static str {
        "Catalog"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates the built-in catalog and its on-screen layout")
    }

    fn check(&self) -> CheckResult {
        let catalog = match Catalog::builtin() {
            Ok(catalog) => catalog,
            Err(e) => return CheckResult::fail(e.to_string()),
        };

        let rects = self.grid.rects(catalog.len());
        let mut findings = Vec::new();

        for (entry, rect) in catalog.iter().zip(&rects) {
            let on_screen = rect.x >= 0
                && rect.y >= 0
                && rect.right() <= LAUNCHER_WIDTH as i32
                && rect.bottom() <= LAUNCHER_HEIGHT as i32;
            let state = if entry.is_enabled() { "enabled" } else { "disabled" };
            let text = format!(
                "{} ({state}) at {},{} {}x{}",
                entry.name(),
                rect.x,
                rect.y,
                rect.width,
                rect.height
            );

            findings.push(if on_screen {
                Finding::ok(text)
            } else {
                Finding::fail(format!("{text} is off screen"))
            });
        }

        let overlapping = rects.iter().enumerate().any(|(i, a)| {
            rects[i + 1..].iter().any(|b| {
                a.x < b.right() && b.x < a.right() && a.y < b.bottom() && b.y < a.bottom()
            })
        });
        if overlapping {
            findings.push(Finding::fail("Buttons overlap"));
        }

        let enabled = catalog.iter().filter(|e| e.is_enabled()).count();
        CheckResult::from_findings(
            findings,
            format!("{} entries, {enabled} playable", catalog.len()),
        )
    }
}
