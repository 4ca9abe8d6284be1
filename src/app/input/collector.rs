//! Raw input collection from winit events

use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::PhysicalKey;

use super::events::{InputEvent, KeyCode};

/// Collects winit window events into a pointer position and an event queue
///
/// Window events arrive between frames; the frame loop reads the pointer and
/// drains the queue once per frame.
pub struct InputCollector {
    pointer: Option<[f32; 2]>,
    queue: Vec<InputEvent>,
    scale_factor: f32,
}

impl InputCollector {
    /// Creates a new input collector
    pub fn new() -> Self {
        Self {
            pointer: None,
            queue: Vec::new(),
            scale_factor: 1.0,
        }
    }

    /// Update scale factor (DPI scaling)
    pub fn set_scale_factor(&mut self, scale_factor: f32) {
        self.scale_factor = scale_factor;
    }

    /// Handle a winit window event
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.pointer = Some([
                    position.x as f32 / self.scale_factor,
                    position.y as f32 / self.scale_factor,
                ]);
            }

            WindowEvent::CursorLeft { .. } => {
                self.pointer = None;
            }

            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                // A press without a known position cannot hit anything
                if let Some(pos) = self.pointer {
                    self.queue.push(InputEvent::Press { pos });
                }
            }

            WindowEvent::KeyboardInput { event, .. }
                if event.state.is_pressed() && !event.repeat =>
            {
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.queue.push(InputEvent::KeyPress {
                        key: KeyCode::from(code),
                    });
                }
            }

            WindowEvent::CloseRequested => {
                self.queue.push(InputEvent::Quit);
            }

            _ => {}
        }
    }

    /// Current pointer position in logical pixels, if inside the window
    pub fn pointer(&self) -> Option<[f32; 2]> {
        self.pointer
    }

    /// Takes every event queued since the last drain, oldest first
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.queue)
    }

    /// Number of events waiting to be drained
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Forgets the pointer and all queued events
    ///
    /// Used when the window is dropped: input collected for a window that no
    /// longer exists must not leak into the next one.
    pub fn reset(&mut self) {
        self.pointer = None;
        self.queue.clear();
    }

    /// Queue an event directly
    pub fn push(&mut self, event: InputEvent) {
        self.queue.push(event);
    }
}

impl Default for InputCollector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;
    use winit::event::DeviceId;

    fn device() -> DeviceId {
        // SAFETY: only compared against other ids, never passed to winit
        unsafe { DeviceId::dummy() }
    }

    fn cursor_moved(x: f64, y: f64) -> WindowEvent {
        WindowEvent::CursorMoved {
            device_id: device(),
            position: PhysicalPosition::new(x, y),
        }
    }

    fn left_press() -> WindowEvent {
        WindowEvent::MouseInput {
            device_id: device(),
            state: ElementState::Pressed,
            button: MouseButton::Left,
        }
    }

    #[test]
    fn test_pointer_is_scaled_to_logical_pixels() {
        let mut collector = InputCollector::new();
        collector.set_scale_factor(2.0);
        collector.handle_window_event(&cursor_moved(200.0, 100.0));

        assert_eq!(collector.pointer(), Some([100.0, 50.0]));
    }

    #[test]
    fn test_press_is_queued_at_pointer() {
        let mut collector = InputCollector::new();
        collector.handle_window_event(&cursor_moved(10.0, 20.0));
        collector.handle_window_event(&left_press());
        collector.handle_window_event(&WindowEvent::CloseRequested);

        assert_eq!(
            collector.drain(),
            vec![InputEvent::Press { pos: [10.0, 20.0] }, InputEvent::Quit]
        );
        assert_eq!(collector.pending(), 0);
    }

    #[test]
    fn test_press_without_pointer_is_ignored() {
        let mut collector = InputCollector::new();
        collector.handle_window_event(&left_press());
        assert!(collector.drain().is_empty());
    }

    #[test]
    fn test_right_click_is_ignored() {
        let mut collector = InputCollector::new();
        collector.handle_window_event(&cursor_moved(10.0, 20.0));
        collector.handle_window_event(&WindowEvent::MouseInput {
            device_id: device(),
            state: ElementState::Pressed,
            button: MouseButton::Right,
        });
        assert!(collector.drain().is_empty());
    }

    #[test]
    fn test_cursor_left_clears_pointer() {
        let mut collector = InputCollector::new();
        collector.handle_window_event(&cursor_moved(10.0, 20.0));
        collector.handle_window_event(&WindowEvent::CursorLeft {
            device_id: device(),
        });
        assert_eq!(collector.pointer(), None);
    }

    #[test]
    fn test_reset_forgets_everything() {
        let mut collector = InputCollector::new();
        collector.handle_window_event(&cursor_moved(10.0, 20.0));
        collector.push(InputEvent::Quit);
        collector.reset();

        assert_eq!(collector.pointer(), None);
        assert_eq!(collector.pending(), 0);
    }
}
