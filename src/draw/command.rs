//! Render instructions issued by the UI layer.

use super::color::Color;
use crate::util::Point;

/// One primitive in a frame's render instruction sequence.
///
/// The sequence for a frame is deterministic: the same layout, state and
/// landmarks always produce the same commands in the same order.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Axis-aligned rectangle from `top_left` to the exclusive `bottom_right`
    Rect {
        top_left: Point,
        bottom_right: Point,
        color: Color,
        filled: bool,
    },
    /// Text whose baseline starts at `position`
    Text {
        position: Point,
        text: String,
        font_size: f64,
        color: Color,
    },
    /// Straight segment from `start` to `end`
    Line {
        start: Point,
        end: Point,
        color: Color,
        thickness: f64,
    },
    /// Circle around `center`
    Circle {
        center: Point,
        radius: i32,
        color: Color,
        filled: bool,
    },
    /// End of frame; the surface shows what was drawn
    Present,
}
