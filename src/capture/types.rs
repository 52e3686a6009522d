//! Data types for frame capture and recorded detector output.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One captured frame.
///
/// Carries the frame geometry that landmark pixel coordinates are derived
/// from, plus the raw detector observations recorded for this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Zero-based position in the stream
    pub index: u64,
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
    /// Raw hand observations, in detector order
    pub observations: Vec<HandObservation>,
}

/// A single hand as reported by the detector, before pixel conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandObservation {
    /// Detection confidence (0.0-1.0); recordings without scores count as certain
    #[serde(default = "default_score")]
    pub score: f32,
    /// Normalised `[x, y]` positions (0.0-1.0), in skeleton index order
    pub landmarks: Vec<[f32; 2]>,
}

fn default_score() -> f32 {
    1.0
}

/// One line of a replay recording.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordedFrame {
    #[serde(default)]
    pub hands: Vec<HandObservation>,
}

/// Errors that can occur while acquiring frames.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("Failed to read frame source: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed recording at line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid frame dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}
