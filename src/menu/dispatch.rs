//! Hover and click resolution
//!
//! Both scans walk the buttons in catalog order and stop at the first
//! enabled button under the position. With a correct layout rects never
//! overlap, so catalog order only matters as a tie-break.

use super::button::Button;

/// Index of the enabled button under `pointer`, if any
pub fn resolve_hover(buttons: &[Button], pointer: Option<[f32; 2]>) -> Option<usize> {
    let pointer = pointer?;
    buttons.iter().position(|button| button.accepts(pointer))
}

/// Index of the enabled button a press at `pos` activates, if any
///
/// At most one button is hit per press.
pub fn resolve_click(buttons: &[Button], pos: [f32; 2]) -> Option<usize> {
    buttons.iter().position(|button| button.accepts(pos))
}
