mod core;

pub use core::{FrameOutcome, InteractionState};
