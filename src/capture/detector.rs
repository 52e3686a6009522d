//! Detector stage for recorded observations.

use super::dependencies::HandDetector;
use super::types::{Frame, HandObservation};
use crate::config::Config;
use crate::input::{LANDMARK_COUNT, LandmarkSet};
use crate::util::Point;

/// Normalised coordinates may stray this far past the frame edges before a
/// hand is considered corrupt.
const MAX_OFF_FRAME: f32 = 1.0;

/// Runtime settings for turning observations into landmark sets.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectorSettings {
    /// Hands scored below this are discarded
    pub min_detection_confidence: f32,
    /// At most this many hands are returned per frame
    pub max_hands: usize,
    /// Flip x so the overlay behaves like a mirror (on by default, as in
    /// `[camera]`)
    pub mirror: bool,
}

impl Default for DetectorSettings {
    fn default() -> Self {
        Self {
            min_detection_confidence: 0.8,
            max_hands: 1,
            mirror: true,
        }
    }
}

impl DetectorSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            min_detection_confidence: config.detector.min_detection_confidence,
            max_hands: config.detector.max_hands,
            mirror: config.camera.mirror,
        }
    }
}

/// Passes recorded observations through confidence filtering and pixel conversion.
#[derive(Debug, Clone, Default)]
pub struct RecordedDetector {
    settings: DetectorSettings,
}

impl RecordedDetector {
    pub fn new(settings: DetectorSettings) -> Self {
        Self { settings }
    }

    /// Converts one observation to pixel space; `None` if it is unusable.
    pub fn to_landmarks(&self, observation: &HandObservation, frame: &Frame) -> Option<LandmarkSet> {
        if observation.landmarks.len() != LANDMARK_COUNT {
            log::warn!(
                "Frame {}: dropping hand with {} landmarks (expected {})",
                frame.index,
                observation.landmarks.len(),
                LANDMARK_COUNT
            );
            return None;
        }

        if observation
            .landmarks
            .iter()
            .any(|[x, y]| !x.is_finite() || !y.is_finite())
        {
            log::warn!("Frame {}: dropping hand with non-finite landmarks", frame.index);
            return None;
        }

        let in_range = |v: f32| (-MAX_OFF_FRAME..=1.0 + MAX_OFF_FRAME).contains(&v);
        if observation
            .landmarks
            .iter()
            .any(|[x, y]| !in_range(*x) || !in_range(*y))
        {
            log::warn!(
                "Frame {}: dropping hand with landmarks far outside the frame",
                frame.index
            );
            return None;
        }

        let width = frame.width as f32;
        let height = frame.height as f32;
        let points = observation.landmarks.iter().map(|[x, y]| {
            let mut px = (x * width) as i32;
            let py = (y * height) as i32;
            if self.settings.mirror {
                px = (frame.width as i32 - 1).saturating_sub(px);
            }
            Point::new(px, py)
        });

        LandmarkSet::from_points(points)
    }
}

impl HandDetector for RecordedDetector {
    fn detect(&mut self, frame: &Frame) -> Vec<LandmarkSet> {
        frame
            .observations
            .iter()
            .filter(|obs| {
                let confident = obs.score >= self.settings.min_detection_confidence;
                if !confident {
                    log::debug!(
                        "Frame {}: ignoring hand with score {:.2}",
                        frame.index,
                        obs.score
                    );
                }
                confident
            })
            .filter_map(|obs| self.to_landmarks(obs, frame))
            .take(self.settings.max_hands)
            .collect()
    }
}
