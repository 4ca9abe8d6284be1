//! Ownership of the shared display
//!
//! There is exactly one winit event loop per process. [`DisplayContext`] owns
//! it and records who is currently allowed to open windows on it: the
//! launcher, or the game it handed the display to. Games receive the context
//! by `&mut` for the duration of their run, so the hand-off is visible in
//! every signature that takes part in it.

use thiserror::Error;
use tracing::{debug, info};
use winit::application::ApplicationHandler;
use winit::error::EventLoopError;
use winit::event_loop::{ControlFlow, EventLoop};
use winit::platform::run_on_demand::EventLoopExtRunOnDemand;

use super::window::SurfaceSpec;

/// Errors raised by the display
#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("failed to create event loop: {0}")]
    Create(#[source] EventLoopError),

    #[error("event loop failed: {0}")]
    Run(#[source] EventLoopError),

    #[error("no event loop is available on a headless display")]
    Headless,
}

/// Current holder of the display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayOwner {
    Launcher,
    Game(String),
}

/// The process-wide display, passed explicitly to whoever runs on it
pub struct DisplayContext {
    event_loop: Option<EventLoop<()>>,
    launcher_surface: SurfaceSpec,
    owner: DisplayOwner,
    generation: u64,
}

impl DisplayContext {
    /// Creates the event loop; the launcher owns the display initially
    pub fn new(launcher_surface: SurfaceSpec) -> Result<Self, DisplayError> {
        let event_loop = EventLoop::new().map_err(DisplayError::Create)?;
        info!(title = %launcher_surface.title, "Display acquired");
        Ok(Self {
            event_loop: Some(event_loop),
            launcher_surface,
            owner: DisplayOwner::Launcher,
            generation: 0,
        })
    }

    /// Creates a display without an event loop
    ///
    /// Ownership bookkeeping works as usual; running an application on it
    /// fails with [`DisplayError::Headless`].
    pub fn headless(launcher_surface: SurfaceSpec) -> Self {
        Self {
            event_loop: None,
            launcher_surface,
            owner: DisplayOwner::Launcher,
            generation: 0,
        }
    }

    /// Runs `app` on the event loop until it calls `exit()`
    ///
    /// The loop can be run again afterwards, which is what allows the
    /// launcher and its games to take turns on the same display.
    ///
    /// Every run starts with [`ControlFlow::Wait`]; winit otherwise keeps
    /// whatever deadline the previous run left behind.
    pub fn run_app<A: ApplicationHandler>(&mut self, app: &mut A) -> Result<(), DisplayError> {
        let event_loop = self.event_loop.as_mut().ok_or(DisplayError::Headless)?;
        event_loop.set_control_flow(ControlFlow::Wait);
        event_loop.run_app_on_demand(app).map_err(DisplayError::Run)
    }

    /// Transfers the display to the game `name`
    pub fn hand_off(&mut self, name: &str) {
        debug!(game = name, "Handing display to game");
        self.owner = DisplayOwner::Game(name.to_string());
    }

    /// Returns the display to the launcher and re-registers its surface
    ///
    /// The game may have opened windows of another size or caption, so the
    /// launcher surface is handed back for the launcher to recreate its
    /// window from.
    pub fn reclaim(&mut self) -> &SurfaceSpec {
        self.owner = DisplayOwner::Launcher;
        self.generation += 1;
        info!(
            title = %self.launcher_surface.title,
            generation = self.generation,
            "Display reclaimed by launcher"
        );
        &self.launcher_surface
    }

    pub fn owner(&self) -> &DisplayOwner {
        &self.owner
    }

    /// Number of times the launcher has reclaimed the display
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn launcher_surface(&self) -> &SurfaceSpec {
        &self.launcher_surface
    }

    pub fn is_headless(&self) -> bool {
        self.event_loop.is_none()
    }
}
