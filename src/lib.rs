//! FH Aachen Game Portal
//!
//! A fullscreen-style launcher built with winit, wgpu and egui. It shows a
//! grid of games and hands the display to whichever one is picked.

/// Launcher application - display, windowing, rendering, and input handling
pub mod app;

/// Image loading for logos and button icons
pub mod assets;

/// Build-time information (git SHA, timestamp, toolchain)
pub mod build_info;

/// Board games shipped with the portal
pub mod games;

/// Startup self-tests
pub mod health;

/// Menu model: catalog, layout, hover and click dispatch, lifecycle
pub mod menu;
