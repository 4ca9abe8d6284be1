//! Window descriptions

use winit::dpi::LogicalSize;
use winit::window::WindowAttributes;

/// Launcher window width in logical pixels
pub const LAUNCHER_WIDTH: u32 = 1600;
/// Launcher window height in logical pixels
pub const LAUNCHER_HEIGHT: u32 = 900;
/// Caption applied every time the launcher acquires the display
pub const LAUNCHER_TITLE: &str = "FH Aachen Game Portal";

/// Size and caption of a window that owns the display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceSpec {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl SurfaceSpec {
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            title: title.into(),
            width,
            height,
        }
    }

    /// The fixed launcher window
    pub fn launcher() -> Self {
        Self::new(LAUNCHER_TITLE, LAUNCHER_WIDTH, LAUNCHER_HEIGHT)
    }

    /// Creates window attributes for this surface
    ///
    /// Windows are never resizable: layouts are computed once for a fixed
    /// logical size.
    pub fn window_attributes(&self) -> WindowAttributes {
        WindowAttributes::default()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(self.width as f64, self.height as f64))
            .with_resizable(false)
            .with_decorations(true)
    }
}
