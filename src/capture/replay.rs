//! Frame source backed by a recorded landmark stream.
//!
//! Each non-empty line of the recording is one frame:
//!
//! ```json
//! {"hands":[{"score":0.93,"landmarks":[[0.51,0.62],[0.50,0.58], ...]}]}
//! ```
//!
//! Coordinates are normalised to the frame size, as a landmark detector
//! reports them. `{}` or `{"hands":[]}` is a frame with no hand in view.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use super::dependencies::FrameSource;
use super::types::{CaptureError, Frame, RecordedFrame};

/// Streams frames from a JSON-lines recording.
pub struct ReplaySource<R: BufRead> {
    lines: Lines<R>,
    /// 1-based number of the last line read
    line_number: usize,
    next_index: u64,
    width: u32,
    height: u32,
    finished: bool,
}

impl ReplaySource<BufReader<File>> {
    /// Opens a recording file.
    pub fn open(path: &Path, width: u32, height: u32) -> Result<Self, CaptureError> {
        let file = File::open(path)?;
        log::info!("Replaying landmark recording {}", path.display());
        Self::from_reader(BufReader::new(file), width, height)
    }
}

impl<R: BufRead> ReplaySource<R> {
    /// Wraps any buffered reader; frames report `width` x `height`.
    pub fn from_reader(reader: R, width: u32, height: u32) -> Result<Self, CaptureError> {
        if width == 0 || height == 0 {
            return Err(CaptureError::InvalidDimensions { width, height });
        }

        Ok(Self {
            lines: reader.lines(),
            line_number: 0,
            next_index: 0,
            width,
            height,
            finished: false,
        })
    }

    /// Number of frames produced so far.
    pub fn frames_read(&self) -> u64 {
        self.next_index
    }
}

impl<R: BufRead> FrameSource for ReplaySource<R> {
    fn next_frame(&mut self) -> Result<Option<Frame>, CaptureError> {
        if self.finished {
            return Ok(None);
        }

        loop {
            let Some(line) = self.lines.next() else {
                self.finished = true;
                log::info!("Recording exhausted after {} frames", self.next_index);
                return Ok(None);
            };
            let line = line?;
            self.line_number += 1;

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let recorded: RecordedFrame =
                serde_json::from_str(trimmed).map_err(|source| CaptureError::Malformed {
                    line: self.line_number,
                    source,
                })?;

            let frame = Frame {
                index: self.next_index,
                width: self.width,
                height: self.height,
                observations: recorded.hands,
            };
            self.next_index += 1;
            return Ok(Some(frame));
        }
    }
}
