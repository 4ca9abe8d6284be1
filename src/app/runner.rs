//! Launcher application handler

use std::sync::Arc;
use std::time::Instant;

use anyhow::anyhow;
use tracing::{debug, error, info, warn};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::{Window, WindowId};

use super::frame_clock::FrameClock;
use super::input::{InputCollector, InputEvent};
use super::renderer::Renderer;
use super::window::SurfaceSpec;
use crate::menu::{Menu, MenuAction};

/// Why the launcher's event loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    /// The entry at this index was clicked
    Launch(usize),
    /// The window was closed
    Quit,
}

/// The launcher's side of the event loop
///
/// Each frame recomputes hover, renders, then drains and acts on queued
/// input. The loop exits as soon as an action needs the display for
/// something else; the window and renderer are dropped on the way out and
/// recreated the next time the loop runs.
pub struct App {
    menu: Menu,
    surface: SurfaceSpec,
    vsync: bool,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    input: InputCollector,
    clock: FrameClock,
    exit: Option<LoopExit>,
    failure: Option<anyhow::Error>,
}

impl App {
    pub fn new(menu: Menu, surface: SurfaceSpec, vsync: bool, target_fps: u32) -> Self {
        info!(title = %surface.title, target_fps, vsync, "Launcher configured");
        Self {
            menu,
            surface,
            vsync,
            window: None,
            renderer: None,
            input: InputCollector::new(),
            clock: FrameClock::new(target_fps),
            exit: None,
            failure: None,
        }
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn input_mut(&mut self) -> &mut InputCollector {
        &mut self.input
    }

    pub fn has_window(&self) -> bool {
        self.window.is_some()
    }

    /// Takes the reason the last loop run ended
    pub fn take_exit(&mut self) -> Option<LoopExit> {
        self.exit.take()
    }

    /// Takes the error that ended the last loop run, if any
    pub fn take_failure(&mut self) -> Option<anyhow::Error> {
        self.failure.take()
    }

    /// Prepares for the next loop run after the display was reclaimed
    ///
    /// Hover and pending input from before the hand-off are discarded.
    pub fn reacquire(&mut self, surface: SurfaceSpec) {
        self.surface = surface;
        self.menu.reset_hover();
        self.input.reset();
        self.clock.reset();
    }

    /// Hover and input half of a frame
    ///
    /// Returns the action that ends the loop, if any, and records it for
    /// [`App::take_exit`]. Events queued behind that action are discarded.
    pub fn update(&mut self) -> Option<LoopExit> {
        self.menu.update_hover(self.input.pointer());
        let exit = self.act();
        if exit.is_some() {
            self.exit = exit;
        }
        exit
    }

    /// Records an error that ends the current loop run
    pub(crate) fn record_failure(&mut self, error: anyhow::Error) {
        error!(error = %error, "Launcher failed");
        self.failure = Some(error);
    }

    /// How long the event loop may sleep before the next frame
    ///
    /// Once the run is ending there is no next frame, so nothing is left
    /// scheduled for whoever runs on the display next.
    fn control_flow(&self) -> ControlFlow {
        match self.clock.deadline() {
            Some(deadline) if self.exit.is_none() && self.failure.is_none() => {
                ControlFlow::WaitUntil(deadline)
            }
            _ => ControlFlow::Wait,
        }
    }

    // Drained events behind a launch are dropped, not replayed after the game
    fn act(&mut self) -> Option<LoopExit> {
        for event in self.input.drain() {
            match self.menu.handle(&event) {
                MenuAction::None => {}
                MenuAction::Launch(index) => {
                    debug!(index, "Entry clicked");
                    return Some(LoopExit::Launch(index));
                }
                MenuAction::Quit => return Some(LoopExit::Quit),
            }
        }
        None
    }

    /// Queues an event as if it came from the window
    pub fn push_event(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    fn ensure_window(&mut self, event_loop: &ActiveEventLoop) {
        let stopping = self.exit.is_some() || self.failure.is_some() || event_loop.exiting();
        if self.window.is_some() || stopping {
            return;
        }

        if let Err(e) = self.open_window(event_loop) {
            self.record_failure(e.context("failed to create launcher window"));
            event_loop.set_control_flow(ControlFlow::Wait);
            event_loop.exit();
        }
    }

    fn open_window(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let window = Arc::new(event_loop.create_window(self.surface.window_attributes())?);
        let size = window.inner_size();
        info!(
            window.width = size.width,
            window.height = size.height,
            "Launcher window created"
        );

        let renderer = Renderer::create_blocking(window.clone(), self.vsync)?;
        info!("Renderer initialized successfully");

        self.input.set_scale_factor(window.scale_factor() as f32);
        self.renderer = Some(renderer);
        self.window = Some(window);
        Ok(())
    }

    /// Drops the window and renderer and stops the loop
    fn release(&mut self, event_loop: &ActiveEventLoop, exit: LoopExit) {
        self.exit = Some(exit);
        self.renderer = None;
        self.window = None;
        self.input.reset();
        event_loop.set_control_flow(ControlFlow::Wait);
        event_loop.exit();
    }

    fn render(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) else {
            return;
        };

        match renderer.draw(window, &self.menu.compose()) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                warn!("Surface lost, reconfiguring");
                renderer.resize(window.inner_size());
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                self.record_failure(anyhow!("GPU out of memory"));
                self.release(event_loop, LoopExit::Quit);
            }
            Err(e) => {
                error!(error = %e, "Render error");
            }
        }
    }

    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        self.menu.update_hover(self.input.pointer());
        self.render(event_loop);
        if self.window.is_none() {
            return;
        }

        if let Some(exit) = self.act() {
            self.release(event_loop, exit);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        self.ensure_window(event_loop);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // A loop run on demand does not always start with `resumed`
        self.ensure_window(event_loop);
        if self.window.is_none() {
            return;
        }

        let now = Instant::now();
        if self.clock.is_due(now) {
            self.clock.tick(now);
            self.frame(event_loop);
        }
        event_loop.set_control_flow(self.control_flow());
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        self.input.handle_window_event(&event);

        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            renderer.handle_event(window, &event);
        }

        match event {
            WindowEvent::RedrawRequested => self.render(event_loop),
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.input.set_scale_factor(scale_factor as f32);
            }
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size);
                }
            }
            _ => {}
        }
    }
}
