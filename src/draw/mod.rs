//! Rendering primitives and surfaces (Cairo-based).
//!
//! This module defines the drawing types used for the keyboard overlay:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`DrawCommand`]: one primitive of a frame's render instruction sequence
//! - [`RenderSurface`]: the drawing target, implemented by [`CairoSurface`]
//!   and the headless [`CommandRecorder`]

pub mod color;
pub mod command;
pub mod font;
pub mod render;
pub mod surface;

// Re-export commonly used types at module level
pub use color::Color;
pub use command::DrawCommand;
pub use font::FontDescriptor;
pub use render::CairoSurface;
pub use surface::{CommandRecorder, RenderError, RenderSurface};

// Re-export color constants for public API
#[allow(unused_imports)]
pub use color::{BLACK, BLUE, DARK_GRAY, GRAY, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
