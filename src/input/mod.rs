//! Per-frame interaction: landmarks in, keystrokes out.
//!
//! This module turns a stream of hand landmarks into text. It hit-tests the
//! index fingertip against the layout, debounces the click posture into single
//! commit edges, and applies committed keys to the text buffer.

pub mod gesture;
pub mod landmarks;
pub mod state;
pub mod text;

// Re-export commonly used types at module level
pub use gesture::{DebounceOutcome, GestureDebouncer};
pub use landmarks::{
    FingerPosture, HAND_CONNECTIONS, HandPoint, LANDMARK_COUNT, Landmark, LandmarkSet,
};
pub use state::{FrameOutcome, InteractionState};
pub use text::TextBuffer;
