//! Typing session driver.
//!
//! Pulls frames from a [`FrameSource`](crate::capture::FrameSource), runs the
//! hand detector, advances the interaction state and renders every frame. The
//! loop ends when the source is exhausted, the frame limit is hit or the stop
//! flag is raised by a signal.

mod options;
mod runner;

pub use options::{SessionOptions, options_from_config};
pub use runner::{Session, SessionSummary, install_stop_handler};
