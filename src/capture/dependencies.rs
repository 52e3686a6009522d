use crate::capture::types::{CaptureError, Frame};
use crate::input::LandmarkSet;

/// Abstraction over where frames come from (camera, recording, test script).
pub trait FrameSource {
    /// Returns the next frame, or `Ok(None)` once the stream is exhausted.
    ///
    /// After `Ok(None)` callers must not ask for more frames.
    fn next_frame(&mut self) -> Result<Option<Frame>, CaptureError>;
}

/// Abstraction over the hand-landmark detector.
pub trait HandDetector {
    /// Returns zero or more hands for `frame`, each in pixel space.
    fn detect(&mut self, frame: &Frame) -> Vec<LandmarkSet>;
}

impl<S: FrameSource + ?Sized> FrameSource for Box<S> {
    fn next_frame(&mut self) -> Result<Option<Frame>, CaptureError> {
        (**self).next_frame()
    }
}

impl<D: HandDetector + ?Sized> HandDetector for Box<D> {
    fn detect(&mut self, frame: &Frame) -> Vec<LandmarkSet> {
        (**self).detect(frame)
    }
}
