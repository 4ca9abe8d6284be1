//! Input handling system
//!
//! ```text
//! Raw Input (winit) → InputCollector → pointer position + event queue
//!                                              ↓
//!                                   frame loop (once per frame)
//! ```
//!
//! The pointer position is continuous state, read every frame for hover.
//! Presses, key presses and close requests are discrete events, queued in
//! arrival order and drained once per frame.

mod collector;
mod events;

pub use collector::InputCollector;
pub use events::{InputEvent, KeyCode};
