//! The launcher's outer loop: menu, game, menu again

use anyhow::Context as _;
use tracing::info;

use super::config::AppConfig;
use super::display::{DisplayContext, DisplayError};
use super::runner::{App, LoopExit};
use super::window::{LAUNCHER_HEIGHT, SurfaceSpec};
use crate::assets::AssetSource;
use crate::menu::catalog::Catalog;
use crate::menu::layout::GridLayout;
use crate::menu::lifecycle::{LaunchError, LaunchOutcome, LifecycleManager};
use crate::menu::Menu;

/// Runs the menu and launches games on the same display until quit
pub struct Launcher {
    app: App,
    lifecycle: LifecycleManager,
}

impl Launcher {
    /// Builds the menu for `catalog` using the launcher settings in `config`
    pub fn new(catalog: Catalog, config: &AppConfig, assets: &dyn AssetSource) -> Self {
        let menu = Menu::new(catalog, &GridLayout::LAUNCHER, LAUNCHER_HEIGHT, assets);
        let app = App::new(
            menu,
            SurfaceSpec::launcher(),
            config.window.vsync,
            config.launcher.target_fps,
        );

        Self {
            app,
            lifecycle: LifecycleManager::new(config.launcher.launch_failure),
        }
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    /// Runs until the launcher window is closed
    ///
    /// Returns an error if the display fails or a game fails under the
    /// `abort` policy.
    pub fn run(&mut self, display: &mut DisplayContext) -> anyhow::Result<()> {
        self.run_with(display, |display, app| display.run_app(app))
    }

    /// [`Launcher::run`] with a custom menu loop
    ///
    /// `run_menu` drives `app` until it records an exit or a failure.
    pub fn run_with<F>(&mut self, display: &mut DisplayContext, mut run_menu: F) -> anyhow::Result<()>
    where
        F: FnMut(&mut DisplayContext, &mut App) -> Result<(), DisplayError>,
    {
        loop {
            run_menu(display, &mut self.app).context("launcher event loop failed")?;

            if let Some(failure) = self.app.take_failure() {
                return Err(failure.context("launcher window failed"));
            }

            match self.app.take_exit() {
                Some(LoopExit::Launch(index)) => {
                    self.launch(index, display)?;
                }
                Some(LoopExit::Quit) | None => {
                    info!("Launcher closed");
                    return Ok(());
                }
            }
        }
    }

    /// Launches entry `index` and prepares the menu to resume afterwards
    pub fn launch(
        &mut self,
        index: usize,
        display: &mut DisplayContext,
    ) -> Result<LaunchOutcome, LaunchError> {
        let Some(entry) = self.app.menu().entry(index).cloned() else {
            return Ok(LaunchOutcome::Skipped);
        };

        let result = self.lifecycle.launch(&entry, display);
        if !matches!(result, Ok(LaunchOutcome::Skipped)) {
            self.app.reacquire(display.launcher_surface().clone());
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::app::display::DisplayOwner;
    use crate::app::input::InputEvent;
    use crate::assets::{AssetError, Surface};
    use crate::menu::catalog::GameEntry;
    use crate::menu::lifecycle::{LaunchFailurePolicy, Launchable};

    // Two entries share row 0: x 340..760 and 840..1260, y 320..480
    const GAME: [f32; 2] = [550.0, 400.0];
    const SOON: [f32; 2] = [1050.0, 400.0];

    struct NoAssets;

    impl AssetSource for NoAssets {
        fn load(&self, name: &str, _: Option<(u32, u32)>) -> Result<Surface, AssetError> {
            Err(AssetError::NotFound {
                name: name.to_string(),
                path: name.into(),
            })
        }
    }

    struct Game {
        fail: bool,
    }

    impl Launchable for Game {
        fn run(&mut self, display: &mut DisplayContext) -> Result<(), LaunchError> {
            assert_eq!(display.owner(), &DisplayOwner::Game("Game".into()));
            if self.fail {
                Err(anyhow::anyhow!("board exploded").into())
            } else {
                Ok(())
            }
        }
    }

    fn launcher(fail: bool, policy: LaunchFailurePolicy) -> (Launcher, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let entries = [
            GameEntry::new("Game", move || {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(Box::new(Game { fail }) as Box<dyn Launchable>)
            }),
            GameEntry::placeholder("Soon"),
        ];

        let mut config = AppConfig::default();
        config.launcher.launch_failure = policy;
        let launcher = Launcher::new(Catalog::new(entries).unwrap(), &config, &NoAssets);
        (launcher, calls)
    }

    fn press(pos: [f32; 2]) -> InputEvent {
        InputEvent::Press { pos }
    }

    /// Runs `launcher` with one batch of input per menu loop run
    fn run_script(
        launcher: &mut Launcher,
        display: &mut DisplayContext,
        script: Vec<Vec<InputEvent>>,
    ) -> (anyhow::Result<()>, usize) {
        let mut script = VecDeque::from(script);
        let mut runs = 0;
        let result = launcher.run_with(display, |_, app| {
            runs += 1;
            for event in script.pop_front().unwrap_or_default() {
                app.push_event(event);
            }
            app.update();
            Ok(())
        });
        (result, runs)
    }

    #[test]
    fn test_quit_ends_run() {
        let (mut launcher, calls) = launcher(false, LaunchFailurePolicy::Abort);
        let mut display = DisplayContext::headless(SurfaceSpec::launcher());

        let (result, runs) = run_script(&mut launcher, &mut display, vec![vec![InputEvent::Quit]]);

        assert!(result.is_ok());
        assert_eq!(runs, 1);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(display.generation(), 0);
    }

    #[test]
    fn test_launch_then_menu_again() {
        let (mut launcher, calls) = launcher(false, LaunchFailurePolicy::Abort);
        let mut display = DisplayContext::headless(SurfaceSpec::launcher());

        let (result, runs) = run_script(
            &mut launcher,
            &mut display,
            vec![vec![press(GAME)], vec![InputEvent::Quit]],
        );

        assert!(result.is_ok());
        assert_eq!(runs, 2);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(display.generation(), 1);
        assert_eq!(display.owner(), &DisplayOwner::Launcher);
    }

    #[test]
    fn test_disabled_click_does_not_end_run() {
        let (mut launcher, calls) = launcher(false, LaunchFailurePolicy::Abort);
        let mut display = DisplayContext::headless(SurfaceSpec::launcher());

        let (result, runs) = run_script(
            &mut launcher,
            &mut display,
            vec![vec![press(SOON), InputEvent::Quit]],
        );

        assert!(result.is_ok());
        assert_eq!(runs, 1);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_game_failure_aborts() {
        let (mut launcher, calls) = launcher(true, LaunchFailurePolicy::Abort);
        let mut display = DisplayContext::headless(SurfaceSpec::launcher());

        let (result, runs) = run_script(
            &mut launcher,
            &mut display,
            vec![vec![press(GAME)], vec![InputEvent::Quit]],
        );

        let err = result.unwrap_err();
        assert!(format!("{err:#}").contains("board exploded"));
        assert_eq!(runs, 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(display.owner(), &DisplayOwner::Launcher);
    }

    #[test]
    fn test_game_failure_returns_to_menu() {
        let (mut launcher, calls) = launcher(true, LaunchFailurePolicy::ReturnToMenu);
        let mut display = DisplayContext::headless(SurfaceSpec::launcher());

        let (result, runs) = run_script(
            &mut launcher,
            &mut display,
            vec![vec![press(GAME)], vec![press(GAME)], vec![InputEvent::Quit]],
        );

        assert!(result.is_ok());
        assert_eq!(runs, 3);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(display.generation(), 2);
    }

    #[test]
    fn test_window_failure_is_an_error() {
        let (mut launcher, _) = launcher(false, LaunchFailurePolicy::ReturnToMenu);
        let mut display = DisplayContext::headless(SurfaceSpec::launcher());

        let result = launcher.run_with(&mut display, |_, app| {
            app.record_failure(anyhow::anyhow!("no adapter"));
            Ok(())
        });

        let err = result.unwrap_err();
        assert!(format!("{err:#}").contains("no adapter"));
        assert!(launcher.app_mut().take_failure().is_none());
    }

    #[test]
    fn test_display_error_is_an_error() {
        let (mut launcher, _) = launcher(false, LaunchFailurePolicy::Abort);
        let mut display = DisplayContext::headless(SurfaceSpec::launcher());

        let result = launcher.run_with(&mut display, |_, _| Err(DisplayError::Headless));

        let err = result.unwrap_err();
        assert!(err.downcast_ref::<DisplayError>().is_some());
    }
}
