//! Launcher application
//!
//! Handles the display, windowing, rendering, and user input.

pub mod config;
pub mod display;
pub mod frame_clock;
pub mod input;
pub mod launcher;
pub mod renderer;
pub mod runner;
pub mod window;

pub use config::AppConfig;
pub use display::{DisplayContext, DisplayError, DisplayOwner};
pub use launcher::Launcher;
pub use runner::{App, LoopExit};
pub use window::SurfaceSpec;
