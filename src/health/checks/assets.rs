//! Launcher images

use crate::assets::{AssetService, AssetSource};
use crate::health::check::{CheckResult, Finding, SystemCheck};
use crate::menu::button::ICON_SIZE;
use crate::menu::catalog::Catalog;
use crate::menu::scene::{LOGO, LOGO_SIZE};

/// Loads the logo and every catalog icon
///
/// Missing images only warn: the launcher draws without them.
pub struct AssetCheck {
    service: AssetService,
}

impl AssetCheck {
    pub fn new(service: AssetService) -> Self {
        Self { service }
    }
}

impl SystemCheck for AssetCheck {
    fn name(&self) -> &'static str {
        "Assets"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Loads the launcher logo and game icons")
    }

    fn check(&self) -> CheckResult {
        let icons: Vec<String> = Catalog::builtin()
            .map(|catalog| {
                catalog
                    .iter()
                    .filter_map(|entry| entry.icon().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default();

        let wanted = std::iter::once((LOGO.to_string(), LOGO_SIZE))
            .chain(icons.into_iter().map(|icon| (icon, ICON_SIZE)));

        let mut loaded = 0;
        let mut findings = Vec::new();
        for (name, size) in wanted {
            match self.service.load(&name, Some(size)) {
                Ok(surface) => {
                    loaded += 1;
                    findings.push(Finding::ok(format!(
                        "{name} ({}x{})",
                        surface.width(),
                        surface.height()
                    )));
                }
                Err(e) => findings.push(Finding::warn(e.to_string())),
            }
        }

        let total = findings.len();
        CheckResult::from_findings(
            findings,
            format!("{loaded}/{total} images from {}", self.service.root().display()),
        )
    }
}
