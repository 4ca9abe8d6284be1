//! Clickable buttons derived from catalog entries

use std::sync::Arc;

use super::catalog::{Catalog, GameEntry};
use super::layout::{GridLayout, Rect};
use crate::assets::{AssetSource, Surface};

/// Size icons are scaled to
pub const ICON_SIZE: (u32, u32) = (80, 80);

/// Screen representation of one catalog entry
#[derive(Debug, Clone)]
pub struct Button {
    entry: Arc<GameEntry>,
    rect: Rect,
    icon: Option<Arc<Surface>>,
}

impl Button {
    pub fn new(entry: Arc<GameEntry>, rect: Rect, icon: Option<Arc<Surface>>) -> Self {
        Self { entry, rect, icon }
    }

    pub fn entry(&self) -> &Arc<GameEntry> {
        &self.entry
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn icon(&self) -> Option<&Arc<Surface>> {
        self.icon.as_ref()
    }

    /// Whether a press at `pos` activates this button
    pub fn accepts(&self, pos: [f32; 2]) -> bool {
        self.entry.is_enabled() && self.rect.contains(pos)
    }
}

/// Lays out one button per entry and preloads their icons
///
/// Icons that fail to load are left out; the button is still created.
pub fn build_buttons(catalog: &Catalog, grid: &GridLayout, assets: &dyn AssetSource) -> Vec<Button> {
    let rects = grid.rects(catalog.len());

    catalog
        .iter()
        .zip(rects)
        .map(|(entry, rect)| {
            let icon = entry
                .icon()
                .and_then(|name| assets.load_or_warn(name, Some(ICON_SIZE)));
            Button::new(entry.clone(), rect, icon)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetError;

    /// Serves a solid square for every name except `missing`
    struct FakeAssets {
        missing: &'static str,
    }

    impl AssetSource for FakeAssets {
        fn load(&self, name: &str, size: Option<(u32, u32)>) -> Result<Surface, AssetError> {
            if name == self.missing {
                return Err(AssetError::NotFound {
                    name: name.to_string(),
                    path: name.into(),
                });
            }
            let (w, h) = size.unwrap_or((1, 1));
            Ok(Surface::from_rgba(
                name,
                w,
                h,
                vec![255; w as usize * h as usize * 4],
            ))
        }
    }

    #[test]
    fn test_one_button_per_entry_in_grid_order() {
        let catalog = Catalog::builtin().unwrap();
        let assets = FakeAssets { missing: "" };
        let buttons = build_buttons(&catalog, &GridLayout::LAUNCHER, &assets);

        assert_eq!(buttons.len(), 5);
        assert_eq!(buttons[0].rect(), Rect::new(90, 320, 420, 160));
        assert_eq!(buttons[4].rect(), Rect::new(840, 540, 420, 160));
        assert_eq!(buttons[2].entry().name(), "Connect Four");
    }

    #[test]
    fn test_icons_are_scaled_and_missing_icons_skipped() {
        let catalog = Catalog::builtin().unwrap();
        let assets = FakeAssets {
            missing: "icon_othello.png",
        };
        let buttons = build_buttons(&catalog, &GridLayout::LAUNCHER, &assets);

        let icon = buttons[0].icon().unwrap();
        assert_eq!((icon.width(), icon.height()), ICON_SIZE);
        assert!(buttons[1].icon().is_none());
        // Placeholders have no icon configured
        assert!(buttons[3].icon().is_none());
    }

    #[test]
    fn test_disabled_button_never_accepts() {
        let catalog = Catalog::builtin().unwrap();
        let buttons = build_buttons(&catalog, &GridLayout::LAUNCHER, &FakeAssets { missing: "" });

        let inside = [buttons[3].rect().x as f32 + 5.0, buttons[3].rect().y as f32 + 5.0];
        assert!(!buttons[3].accepts(inside));

        let inside = [buttons[0].rect().x as f32 + 5.0, buttons[0].rect().y as f32 + 5.0];
        assert!(buttons[0].accepts(inside));
    }
}
