//! Frame composition for the launcher screen

use std::sync::Arc;

use egui::{Align2, Color32, Pos2, pos2};

use super::button::Button;
use super::LauncherState;
use crate::app::renderer::command::DrawList;
use crate::assets::{AssetSource, Surface};

/// FH Aachen brand colors
pub mod palette {
    use egui::Color32;

    pub const TURQUOISE: Color32 = Color32::from_rgb(0, 166, 160);
    pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);
    pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const DARK_GRAY: Color32 = Color32::from_rgb(40, 40, 40);
    pub const LIGHT_GRAY: Color32 = Color32::from_rgb(230, 230, 230);
    pub const BUTTON: Color32 = Color32::from_rgb(0, 130, 125);
    pub const BUTTON_HOVER: Color32 = Color32::from_rgb(0, 190, 180);
    pub const DISABLED: Color32 = Color32::from_rgb(140, 140, 140);
}

pub const TITLE: &str = "FH Aachen Game Portal";
pub const SUBTITLE: &str = "Robot Interactive Games";
pub const INSTRUCTION: &str = "Select a game to play with the robot";
pub const FOOTER: &str = "Powered by FH Aachen @2025";

const TITLE_SIZE: f32 = 62.0;
const SUBTITLE_SIZE: f32 = 30.0;
const INSTRUCTION_SIZE: f32 = 20.0;
const LABEL_SIZE: f32 = 34.0;
const ENTRY_SUBTITLE_SIZE: f32 = 18.0;
const FOOTER_SIZE: f32 = 17.0;

const SHADOW_OFFSET: i32 = 6;
const CORNER_RADIUS: f32 = 15.0;
const HOVER_BORDER: f32 = 4.0;
const ICON_INSET: i32 = 30;
const LABEL_OFFSET_ICON: i32 = 130;
const LABEL_OFFSET_PLAIN: i32 = 30;

/// Logo image name and size
pub const LOGO: &str = "logo.jpg";
pub const LOGO_SIZE: (u32, u32) = (400, 150);

/// Positioned static text
#[derive(Debug, Clone)]
struct Caption {
    text: &'static str,
    pos: Pos2,
    anchor: Align2,
    size: f32,
    color: Color32,
}

/// Everything on the launcher screen that does not depend on the catalog
///
/// Text positions and the logo are resolved once when the scene is built.
#[derive(Debug, Clone)]
pub struct Scene {
    header: [Caption; 3],
    footer: Caption,
    logo: Option<Arc<Surface>>,
    logo_pos: Pos2,
}

impl Scene {
    /// Lays out the static elements for a `width` x `height` screen
    pub fn new(width: u32, height: u32, assets: &dyn AssetSource) -> Self {
        let center = width as f32 / 2.0;
        let header = [
            Caption {
                text: TITLE,
                pos: pos2(center, 120.0),
                anchor: Align2::CENTER_CENTER,
                size: TITLE_SIZE,
                color: palette::BLACK,
            },
            Caption {
                text: SUBTITLE,
                pos: pos2(center, 200.0),
                anchor: Align2::CENTER_CENTER,
                size: SUBTITLE_SIZE,
                color: palette::DARK_GRAY,
            },
            Caption {
                text: INSTRUCTION,
                pos: pos2(center, 250.0),
                anchor: Align2::CENTER_CENTER,
                size: INSTRUCTION_SIZE,
                color: palette::DARK_GRAY,
            },
        ];
        let footer = Caption {
            text: FOOTER,
            pos: pos2(30.0, height as f32 - 40.0),
            anchor: Align2::LEFT_TOP,
            size: FOOTER_SIZE,
            color: palette::DARK_GRAY,
        };

        Self {
            header,
            footer,
            logo: assets.load_or_warn(LOGO, Some(LOGO_SIZE)),
            logo_pos: pos2(width as f32 - 430.0, height as f32 - 170.0),
        }
    }

    pub fn has_logo(&self) -> bool {
        self.logo.is_some()
    }

    /// Builds the draw list for one frame
    pub fn compose(&self, buttons: &[Button], state: &LauncherState) -> DrawList {
        let mut list = DrawList::new(palette::TURQUOISE);

        for caption in &self.header {
            push_caption(&mut list, caption);
        }

        for (index, button) in buttons.iter().enumerate() {
            compose_button(&mut list, button, state.hovered == Some(index));
        }

        if let Some(logo) = &self.logo {
            list.image(logo.clone(), self.logo_pos);
        }

        push_caption(&mut list, &self.footer);

        list
    }
}

fn push_caption(list: &mut DrawList, caption: &Caption) {
    list.text(
        caption.text,
        caption.pos,
        caption.anchor,
        caption.size,
        caption.color,
    );
}

fn compose_button(list: &mut DrawList, button: &Button, hovered: bool) {
    let rect = button.rect();
    let entry = button.entry();
    let enabled = entry.is_enabled();
    let highlighted = enabled && hovered;

    list.fill_rect(
        rect.offset(SHADOW_OFFSET, SHADOW_OFFSET).to_egui(),
        palette::DARK_GRAY,
        CORNER_RADIUS,
    );

    let body = match (enabled, highlighted) {
        (false, _) => palette::DISABLED,
        (true, true) => palette::BUTTON_HOVER,
        (true, false) => palette::BUTTON,
    };
    list.fill_rect(rect.to_egui(), body, CORNER_RADIUS);

    if highlighted {
        list.stroke_rect(rect.to_egui(), palette::WHITE, HOVER_BORDER, CORNER_RADIUS);
    }

    let label_offset = match button.icon() {
        Some(icon) => {
            let top = rect.center_y() - icon.height() as i32 / 2;
            list.image(
                icon.clone(),
                pos2((rect.x + ICON_INSET) as f32, top as f32),
            );
            LABEL_OFFSET_ICON
        }
        None => LABEL_OFFSET_PLAIN,
    };

    let label_pos = pos2((rect.x + label_offset) as f32, rect.center_y() as f32);
    let label_color = if enabled {
        palette::WHITE
    } else {
        palette::LIGHT_GRAY
    };
    list.text(
        entry.name(),
        label_pos,
        Align2::LEFT_CENTER,
        LABEL_SIZE,
        label_color,
    );

    if !enabled && let Some(subtitle) = entry.subtitle() {
        list.text(
            subtitle,
            pos2(label_pos.x, label_pos.y + LABEL_SIZE / 2.0),
            Align2::LEFT_TOP,
            ENTRY_SUBTITLE_SIZE,
            palette::LIGHT_GRAY,
        );
    }
}
