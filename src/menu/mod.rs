//! Launcher menu
//!
//! ## Architecture
//!
//! - `catalog`: The ordered entries the launcher offers
//! - `layout`: Grid placement of one button per entry
//! - `button`: Entries paired with their rect and icon
//! - `dispatch`: Hover and click hit-testing
//! - `scene`: Composes a frame into a draw list
//! - `lifecycle`: Hands the display to a game and takes it back
//!
//! [`Menu`] ties these together into the per-frame state machine:
//! hover is recomputed from the pointer, the frame is composed, then queued
//! input is turned into [`MenuAction`]s.

pub mod button;
pub mod catalog;
pub mod dispatch;
pub mod layout;
pub mod lifecycle;
pub mod scene;

use std::sync::Arc;

use tracing::debug;

use crate::app::input::InputEvent;
use crate::app::renderer::command::DrawList;
use crate::assets::AssetSource;
use button::Button;
use catalog::{Catalog, GameEntry};
use layout::GridLayout;
use scene::Scene;

/// Per-frame launcher state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LauncherState {
    /// Index of the enabled button under the pointer
    pub hovered: Option<usize>,
}

/// What the frame loop should do after an input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    None,
    Launch(usize),
    Quit,
}

/// The launcher screen: catalog, buttons and hover state
pub struct Menu {
    catalog: Catalog,
    buttons: Vec<Button>,
    scene: Scene,
    state: LauncherState,
}

impl Menu {
    /// Builds buttons for `catalog` on `grid` and loads icons and logo
    pub fn new(catalog: Catalog, grid: &GridLayout, screen_height: u32, assets: &dyn AssetSource) -> Self {
        let buttons = button::build_buttons(&catalog, grid, assets);
        let scene = Scene::new(grid.screen_width, screen_height, assets);
        debug!(
            entries = catalog.len(),
            rows = grid.row_count(catalog.len()),
            "Menu built"
        );

        Self {
            catalog,
            buttons,
            scene,
            state: LauncherState::default(),
        }
    }

    /// Recomputes hover from the current pointer position
    pub fn update_hover(&mut self, pointer: Option<[f32; 2]>) -> Option<usize> {
        self.state.hovered = dispatch::resolve_hover(&self.buttons, pointer);
        self.state.hovered
    }

    /// Forgets hover; the next [`update_hover`](Self::update_hover) starts fresh
    pub fn reset_hover(&mut self) {
        self.state = LauncherState::default();
    }

    /// Composes the current frame
    pub fn compose(&self) -> DrawList {
        self.scene.compose(&self.buttons, &self.state)
    }

    /// Maps an input event to the action it triggers
    pub fn handle(&self, event: &InputEvent) -> MenuAction {
        match event {
            InputEvent::Quit => MenuAction::Quit,
            InputEvent::Press { pos } => match dispatch::resolve_click(&self.buttons, *pos) {
                Some(index) => MenuAction::Launch(index),
                None => MenuAction::None,
            },
            // Only closing the window quits the launcher
            InputEvent::KeyPress { .. } => MenuAction::None,
        }
    }

    /// The entry behind button `index`
    pub fn entry(&self, index: usize) -> Option<&Arc<GameEntry>> {
        self.catalog.get(index)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn state(&self) -> LauncherState {
        self.state
    }
}
