//! Frame acquisition and hand detection collaborators.
//!
//! This module provides:
//! - [`FrameSource`] / [`HandDetector`] traits the session loop drives
//! - [`ReplaySource`]: frames read from a JSON-lines landmark recording
//! - [`RecordedDetector`]: converts recorded observations into pixel landmarks

pub mod detector;
pub mod replay;
pub mod types;

mod dependencies;
#[cfg(test)]
mod tests;

pub use dependencies::{FrameSource, HandDetector};
pub use detector::{DetectorSettings, RecordedDetector};
pub use replay::ReplaySource;
#[allow(unused_imports)]
pub use types::{CaptureError, Frame, HandObservation, RecordedFrame};
