//! Discrete input events

/// Events queued between frames and drained once per frame
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// The window was asked to close
    Quit,

    /// Primary mouse button pressed
    Press {
        /// Screen position in logical pixels
        pos: [f32; 2],
    },

    /// Key pressed
    KeyPress { key: KeyCode },
}

/// Keys the launcher and games react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Escape,
    R,
    Other,
}

/// Convert from winit key code
impl From<winit::keyboard::KeyCode> for KeyCode {
    fn from(key: winit::keyboard::KeyCode) -> Self {
        use winit::keyboard::KeyCode as WK;
        match key {
            WK::Escape => Self::Escape,
            WK::KeyR => Self::R,
            _ => Self::Other,
        }
    }
}
