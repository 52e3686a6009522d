use crate::config::Config;

/// Runtime options for one typing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Stop after this many frames even if the source has more
    pub max_frames: Option<u64>,
    /// Consecutive click frames required before a key is typed
    pub stabilize_frames: u32,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            max_frames: None,
            stabilize_frames: 1,
        }
    }
}

impl SessionOptions {
    pub fn with_max_frames(mut self, max_frames: Option<u64>) -> Self {
        self.max_frames = max_frames;
        self
    }

    /// Whether `processed` frames already reach the frame limit.
    pub fn limit_reached(&self, processed: u64) -> bool {
        self.max_frames.is_some_and(|max| processed >= max)
    }
}

/// Builds session options from the loaded configuration.
pub fn options_from_config(config: &Config) -> SessionOptions {
    SessionOptions {
        max_frames: None,
        stabilize_frames: config.gesture.stabilize_frames,
    }
}
