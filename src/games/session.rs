//! Running a board game in its own window

use std::sync::Arc;

use anyhow::anyhow;
use tracing::{error, info, warn};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::{Window, WindowId};

use super::BoardGame;
use super::screen::{GameScreen, ScreenAction, SESSION_SIZE};
use crate::app::display::DisplayContext;
use crate::app::input::InputCollector;
use crate::app::renderer::Renderer;
use crate::app::window::SurfaceSpec;
use crate::menu::lifecycle::{LaunchError, Launchable};

/// A board game window, run on the display the launcher hands over
///
/// The window and renderer only exist while [`Launchable::run`] is active;
/// both are dropped before it returns.
pub struct BoardGameSession<G> {
    screen: GameScreen<G>,
    surface: SurfaceSpec,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    input: InputCollector,
    failure: Option<anyhow::Error>,
}

impl<G: BoardGame> BoardGameSession<G> {
    pub fn new(game: G) -> Self {
        let surface = SurfaceSpec::new(game.name(), SESSION_SIZE, SESSION_SIZE);
        Self {
            screen: GameScreen::new(game),
            surface,
            window: None,
            renderer: None,
            input: InputCollector::new(),
            failure: None,
        }
    }

    pub fn screen(&self) -> &GameScreen<G> {
        &self.screen
    }

    fn open_window(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let window = Arc::new(event_loop.create_window(self.surface.window_attributes())?);
        let renderer = Renderer::create_blocking(window.clone(), true)?;

        info!(title = %self.surface.title, "Game window created");
        self.input.set_scale_factor(window.scale_factor() as f32);
        window.request_redraw();
        self.renderer = Some(renderer);
        self.window = Some(window);
        Ok(())
    }

    /// Drops the window and renderer and stops the event loop
    fn close(&mut self, event_loop: &ActiveEventLoop) {
        self.renderer = None;
        self.window = None;
        self.input.reset();
        event_loop.set_control_flow(ControlFlow::Wait);
        event_loop.exit();
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        error!(error = %error, "Game session failed");
        self.failure = Some(error);
        self.close(event_loop);
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) else {
            return;
        };

        match renderer.draw(window, &self.screen.compose()) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                warn!("Surface lost, reconfiguring");
                renderer.resize(window.inner_size());
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                self.fail(event_loop, anyhow!("GPU out of memory"));
            }
            Err(e) => {
                error!(error = %e, "Render error");
            }
        }
    }
}

impl<G: BoardGame> ApplicationHandler for BoardGameSession<G> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        // Input driven: sleep until the next event
        event_loop.set_control_flow(ControlFlow::Wait);

        if self.window.is_none()
            && self.failure.is_none()
            && let Err(e) = self.open_window(event_loop)
        {
            self.fail(event_loop, e);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        self.input.handle_window_event(&event);

        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            renderer.handle_event(window, &event);
        }

        match event {
            WindowEvent::RedrawRequested => self.redraw(event_loop),
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

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let mut redraw = false;
        for event in self.input.drain() {
            match self.screen.handle(&event) {
                ScreenAction::None => {}
                ScreenAction::Redraw => redraw = true,
                ScreenAction::Exit => {
                    info!(title = %self.surface.title, "Leaving game");
                    self.close(event_loop);
                    return;
                }
            }
        }

        if redraw && let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl<G: BoardGame> Launchable for BoardGameSession<G> {
    fn run(&mut self, display: &mut DisplayContext) -> Result<(), LaunchError> {
        display.run_app(self)?;

        // The loop may also stop without a close request, e.g. on platform exit
        self.renderer = None;
        self.window = None;

        match self.failure.take() {
            Some(error) => Err(error.into()),
            None => Ok(()),
        }
    }
}
