//! Offscreen menu paint

use egui::{Context, RawInput};

use crate::app::renderer::painter::{self, TextureCache};
use crate::app::window::{LAUNCHER_HEIGHT, LAUNCHER_WIDTH};
use crate::assets::AssetService;
use crate::health::check::{CheckResult, Finding, SystemCheck};
use crate::menu::Menu;
use crate::menu::catalog::Catalog;
use crate::menu::layout::GridLayout;

/// Composes the launcher frame and tessellates it in a headless egui context
///
/// Covers everything up to the GPU, so it runs without a window.
pub struct MenuRenderCheck {
    assets: AssetService,
}

impl MenuRenderCheck {
    pub fn new(assets: AssetService) -> Self {
        Self { assets }
    }
}

impl SystemCheck for MenuRenderCheck {
    fn name(&self) -> &'static str {
        "Menu Render"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Paints one launcher frame without a window")
    }

    fn check(&self) -> CheckResult {
        let catalog = match Catalog::builtin() {
            Ok(catalog) => catalog,
            Err(e) => return CheckResult::fail(e.to_string()),
        };
        let menu = Menu::new(catalog, &GridLayout::LAUNCHER, LAUNCHER_HEIGHT, &self.assets);
        let list = menu.compose();

        let ctx = Context::default();
        let mut textures = TextureCache::new();
        let input = RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(LAUNCHER_WIDTH as f32, LAUNCHER_HEIGHT as f32),
            )),
            ..Default::default()
        };
        let output = ctx.run(input, |ctx| painter::paint(ctx, &mut textures, &list));
        let primitives = ctx.tessellate(output.shapes, output.pixels_per_point);

        let mut findings = vec![
            Finding::ok(format!("{} draw commands", list.len())),
            Finding::ok(format!("{} textures uploaded", textures.len())),
        ];
        findings.push(if primitives.is_empty() {
            Finding::fail("Tessellation produced no primitives")
        } else {
            Finding::ok(format!("{} clipped primitives", primitives.len()))
        });
        if !menu.buttons().iter().any(|b| b.icon().is_some()) {
            findings.push(Finding::warn("Buttons render without icons"));
        }

        CheckResult::from_findings(
            findings,
            format!("{} buttons composed", menu.buttons().len()),
        )
    }
}
