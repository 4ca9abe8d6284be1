//! Translates draw lists into egui shapes

use std::collections::HashMap;

use egui::{ColorImage, Context, FontId, LayerId, Stroke, StrokeKind, TextureHandle, TextureOptions};

use super::command::{DrawCommand, DrawList};
use crate::assets::Surface;

/// egui textures uploaded for image surfaces, keyed by surface key
///
/// Textures belong to one egui context, so a cache must not outlive the
/// renderer that created it.
#[derive(Default)]
pub struct TextureCache {
    textures: HashMap<String, TextureHandle>,
}

impl TextureCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the texture for `surface`, uploading it on first use
    pub fn texture_for(&mut self, ctx: &Context, surface: &Surface) -> egui::TextureId {
        self.textures
            .entry(surface.key().to_string())
            .or_insert_with(|| {
                let image = ColorImage::from_rgba_unmultiplied(surface.size(), surface.pixels());
                ctx.load_texture(surface.key(), image, TextureOptions::LINEAR)
            })
            .id()
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

/// Paints every command of `list` onto the background layer of `ctx`
pub fn paint(ctx: &Context, textures: &mut TextureCache, list: &DrawList) {
    let painter = ctx.layer_painter(LayerId::background());
    let full_uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));

    for command in list.commands() {
        match command {
            DrawCommand::FillRect {
                rect,
                color,
                corner_radius,
            } => {
                painter.rect_filled(*rect, *corner_radius, *color);
            }
            DrawCommand::StrokeRect {
                rect,
                color,
                width,
                corner_radius,
            } => {
                painter.rect_stroke(
                    *rect,
                    *corner_radius,
                    Stroke::new(*width, *color),
                    StrokeKind::Inside,
                );
            }
            DrawCommand::Text {
                text,
                pos,
                anchor,
                size,
                color,
            } => {
                painter.text(*pos, *anchor, text, FontId::proportional(*size), *color);
            }
            DrawCommand::Image { surface, pos } => {
                let texture_id = textures.texture_for(ctx, surface);
                let rect = egui::Rect::from_min_size(
                    *pos,
                    egui::vec2(surface.width() as f32, surface.height() as f32),
                );
                painter.image(texture_id, rect, full_uv, egui::Color32::WHITE);
            }
            DrawCommand::Line {
                from,
                to,
                width,
                color,
            } => {
                painter.line_segment([*from, *to], Stroke::new(*width, *color));
            }
            DrawCommand::Circle {
                center,
                radius,
                fill,
                stroke,
            } => {
                if let Some(fill) = fill {
                    painter.circle_filled(*center, *radius, *fill);
                }
                if let Some((width, color)) = stroke {
                    painter.circle_stroke(*center, *radius, Stroke::new(*width, *color));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use egui::{Align2, Color32, Pos2};

    #[test]
    fn test_paint_headless_uploads_each_image_once() {
        let ctx = Context::default();
        let mut textures = TextureCache::new();
        let surface = Arc::new(Surface::from_rgba("dot", 1, 1, vec![255, 255, 255, 255]));

        let mut list = DrawList::new(Color32::BLACK);
        list.image(surface.clone(), Pos2::new(5.0, 5.0));
        list.image(surface, Pos2::new(50.0, 5.0));
        list.text("hello", Pos2::new(10.0, 10.0), Align2::CENTER_CENTER, 20.0, Color32::WHITE);
        list.circle(Pos2::new(20.0, 20.0), 5.0, Some(Color32::RED), Some((1.0, Color32::WHITE)));

        let output = ctx.run(egui::RawInput::default(), |ctx| {
            paint(ctx, &mut textures, &list);
        });

        assert_eq!(textures.len(), 1);
        assert!(!output.shapes.is_empty());
    }
}
