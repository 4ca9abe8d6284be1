//! Launching games
//!
//! A launch is a synchronous hand-off: the launcher gives up the display,
//! the game runs to completion on it, and the launcher takes it back. The
//! launcher does no work at all while a game runs.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error, info};

use super::catalog::GameEntry;
use crate::app::display::{DisplayContext, DisplayError};

/// A game the launcher can hand the display to
pub trait Launchable {
    /// Runs until the game's own exit condition, then returns
    ///
    /// The game owns `display` for the whole call and must close every window
    /// it opened before returning.
    fn run(&mut self, display: &mut DisplayContext) -> Result<(), LaunchError>;
}

/// Builds a fresh game instance for every launch
pub type Factory = Arc<dyn Fn() -> Result<Box<dyn Launchable>, LaunchError> + Send + Sync>;

/// Errors raised while starting or running a game
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("display hand-off failed: {0}")]
    Display(#[from] DisplayError),

    #[error(transparent)]
    Game(#[from] anyhow::Error),
}

/// What to do when a game fails with an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaunchFailurePolicy {
    /// Propagate the error and terminate the launcher
    #[default]
    Abort,
    /// Log the error and show the menu again
    ReturnToMenu,
}

/// Result of a launch request that did not abort
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// The entry was disabled or had no factory
    Skipped,
    /// The game ran and returned normally
    Completed,
    /// The game failed and the failure was recovered from
    Failed,
}

/// Runs games and restores the launcher's display afterwards
#[derive(Debug, Clone, Default)]
pub struct LifecycleManager {
    policy: LaunchFailurePolicy,
}

impl LifecycleManager {
    pub fn new(policy: LaunchFailurePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> LaunchFailurePolicy {
        self.policy
    }

    /// Builds and runs the game for `entry`, blocking until it returns
    ///
    /// Disabled entries and entries without a factory are skipped. The
    /// display is reclaimed whether or not the game succeeded.
    pub fn launch(
        &self,
        entry: &GameEntry,
        display: &mut DisplayContext,
    ) -> Result<LaunchOutcome, LaunchError> {
        let factory = match entry.factory() {
            Some(factory) if entry.is_enabled() => factory,
            _ => {
                debug!(game = entry.name(), "Ignoring launch of unavailable entry");
                return Ok(LaunchOutcome::Skipped);
            }
        };

        info!(game = entry.name(), "Starting game");
        display.hand_off(entry.name());

        let result = factory().and_then(|mut game| game.run(display));

        display.reclaim();

        match result {
            Ok(()) => {
                info!(game = entry.name(), "Game finished, returning to launcher");
                Ok(LaunchOutcome::Completed)
            }
            Err(e) => match self.policy {
                LaunchFailurePolicy::Abort => {
                    error!(game = entry.name(), error = %e, "Game failed, shutting down");
                    Err(e)
                }
                LaunchFailurePolicy::ReturnToMenu => {
                    error!(game = entry.name(), error = %e, "Game failed, returning to launcher");
                    Ok(LaunchOutcome::Failed)
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::app::display::DisplayOwner;
    use crate::app::window::SurfaceSpec;

    /// Records who owned the display while it ran
    struct Probe {
        seen: Arc<Mutex<Vec<DisplayOwner>>>,
        fail: bool,
    }

    impl Launchable for Probe {
        fn run(&mut self, display: &mut DisplayContext) -> Result<(), LaunchError> {
            self.seen.lock().unwrap().push(display.owner().clone());
            if self.fail {
                Err(anyhow::anyhow!("board exploded").into())
            } else {
                Ok(())
            }
        }
    }

    fn probe_entry(
        calls: Arc<AtomicUsize>,
        seen: Arc<Mutex<Vec<DisplayOwner>>>,
        fail: bool,
    ) -> GameEntry {
        GameEntry::new("Probe", move || {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(Probe {
                seen: seen.clone(),
                fail,
            }) as Box<dyn Launchable>)
        })
    }

    #[test]
    fn test_launch_hands_off_and_reclaims() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let entry = probe_entry(calls.clone(), seen.clone(), false);
        let mut display = DisplayContext::headless(SurfaceSpec::launcher());

        let outcome = LifecycleManager::default()
            .launch(&entry, &mut display)
            .unwrap();

        assert_eq!(outcome, LaunchOutcome::Completed);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![DisplayOwner::Game("Probe".into())]
        );
        assert_eq!(display.owner(), &DisplayOwner::Launcher);
        assert_eq!(display.generation(), 1);
    }

    #[test]
    fn test_disabled_entry_is_skipped() {
        let entry = GameEntry::placeholder("Game 4");
        let mut display = DisplayContext::headless(SurfaceSpec::launcher());

        let outcome = LifecycleManager::default()
            .launch(&entry, &mut display)
            .unwrap();

        assert_eq!(outcome, LaunchOutcome::Skipped);
        assert_eq!(display.generation(), 0);
    }

    #[test]
    fn test_disabled_entry_with_factory_is_skipped() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let entry = probe_entry(calls.clone(), seen, false).with_enabled(false);
        let mut display = DisplayContext::headless(SurfaceSpec::launcher());

        let outcome = LifecycleManager::default()
            .launch(&entry, &mut display)
            .unwrap();

        assert_eq!(outcome, LaunchOutcome::Skipped);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_abort_policy_propagates_and_still_reclaims() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let entry = probe_entry(Arc::new(AtomicUsize::new(0)), seen, true);
        let mut display = DisplayContext::headless(SurfaceSpec::launcher());

        let err = LifecycleManager::new(LaunchFailurePolicy::Abort)
            .launch(&entry, &mut display)
            .unwrap_err();

        assert!(err.to_string().contains("board exploded"));
        assert_eq!(display.owner(), &DisplayOwner::Launcher);
        assert_eq!(display.generation(), 1);
    }

    #[test]
    fn test_return_to_menu_policy_recovers() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let entry = probe_entry(Arc::new(AtomicUsize::new(0)), seen, true);
        let mut display = DisplayContext::headless(SurfaceSpec::launcher());

        let outcome = LifecycleManager::new(LaunchFailurePolicy::ReturnToMenu)
            .launch(&entry, &mut display)
            .unwrap();

        assert_eq!(outcome, LaunchOutcome::Failed);
        assert_eq!(display.owner(), &DisplayOwner::Launcher);
    }

    #[test]
    fn test_factory_failure_is_a_launch_error() {
        let entry = GameEntry::new("Broken", || {
            Err(anyhow::anyhow!("missing board data").into())
        });
        let mut display = DisplayContext::headless(SurfaceSpec::launcher());

        let err = LifecycleManager::default()
            .launch(&entry, &mut display)
            .unwrap_err();

        assert!(matches!(err, LaunchError::Game(_)));
        assert_eq!(display.generation(), 1);
    }
}
