//! Interaction state and the per-frame controller.

use crate::input::gesture::{DebounceOutcome, GestureDebouncer};
use crate::input::landmarks::{HandPoint, LandmarkSet};
use crate::input::text::TextBuffer;
use crate::layout::{Key, KeyKind, Layout};

/// What happened during one call to [`InteractionState::process_frame`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameOutcome {
    /// A usable hand was supplied for this frame
    pub hand_present: bool,
    /// Layout index of the key under the index fingertip
    pub active_key: Option<usize>,
    /// Debouncer result (None when no hand was present)
    pub gesture: Option<DebounceOutcome>,
    /// Kind of the key committed this frame, if any
    pub committed: Option<KeyKind>,
}

impl FrameOutcome {
    fn no_hand() -> Self {
        Self {
            hand_present: false,
            active_key: None,
            gesture: None,
            committed: None,
        }
    }
}

/// All mutable interaction state: click-armed flag, active key and typed text.
///
/// One instance lives for the whole session and is advanced exactly once per
/// frame; there is no other owner of the text buffer.
#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    /// Rising-edge detector for the click posture
    debouncer: GestureDebouncer,
    /// Layout index of the currently targeted key, for highlighting
    active_key: Option<usize>,
    /// Accumulated typed text
    text: TextBuffer,
    /// Frames processed so far
    frames: u64,
    /// Keys committed so far
    commits: u64,
}

impl InteractionState {
    /// Creates an empty state. `stabilize_frames` is forwarded to the debouncer.
    pub fn new(stabilize_frames: u32) -> Self {
        Self {
            debouncer: GestureDebouncer::new(stabilize_frames),
            ..Self::default()
        }
    }

    /// Advances the state by one frame.
    ///
    /// `hand` is the first detected hand, or `None` when nothing usable was
    /// detected. Without a hand the active key is cleared and nothing else
    /// changes. With a hand, the index fingertip is hit-tested, the debouncer
    /// sees the click posture whether or not a key is targeted, and a commit
    /// edge over a key mutates the text buffer.
    pub fn process_frame(&mut self, layout: &Layout, hand: Option<&LandmarkSet>) -> FrameOutcome {
        self.frames += 1;

        let Some(hand) = hand else {
            self.active_key = None;
            return FrameOutcome::no_hand();
        };

        let fingertip = hand.point(HandPoint::IndexTip);
        self.active_key = layout.locate_index(fingertip);

        let gesture = self.debouncer.observe(&hand.posture());

        let committed = match (gesture, self.active_key.and_then(|i| layout.get(i))) {
            (DebounceOutcome::Commit, Some(key)) => {
                self.text.apply(&key.kind);
                self.commits += 1;
                log::debug!(
                    "Committed '{}' at ({}, {}), text now {:?}",
                    key.label,
                    fingertip.x,
                    fingertip.y,
                    self.text.as_str()
                );
                Some(key.kind.clone())
            }
            (DebounceOutcome::Commit, None) => {
                log::debug!("Click posture off the keyboard; nothing committed");
                None
            }
            _ => None,
        };

        FrameOutcome {
            hand_present: true,
            active_key: self.active_key,
            gesture: Some(gesture),
            committed,
        }
    }

    pub fn text(&self) -> &TextBuffer {
        &self.text
    }

    pub fn active_key_index(&self) -> Option<usize> {
        self.active_key
    }

    /// The targeted key resolved against `layout`.
    pub fn active_key<'a>(&self, layout: &'a Layout) -> Option<&'a Key> {
        self.active_key.and_then(|i| layout.get(i))
    }

    pub fn is_armed(&self) -> bool {
        self.debouncer.is_armed()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn commits(&self) -> u64 {
        self.commits
    }
}
