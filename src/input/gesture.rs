//! Rising-edge debouncer for the click posture.
//!
//! One commit per discrete gesture, however many frames it is held. There is
//! no hysteresis: a single noisy frame that drops the posture disarms the
//! debouncer, and the next active frame commits again. `stabilize_frames`
//! requires the posture to persist for K frames before the commit; K = 1 is
//! the plain edge detector.

use super::landmarks::FingerPosture;

/// Per-frame result of [`GestureDebouncer::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebounceOutcome {
    /// Rising edge: commit the targeted key this frame.
    Commit,
    /// Posture active but a commit was already issued for this hold.
    Suppressed,
    /// Posture active, still waiting for the stabilisation window.
    Pending,
    /// Posture inactive; debouncer disarmed.
    Idle,
}

impl DebounceOutcome {
    pub fn is_commit(self) -> bool {
        matches!(self, Self::Commit)
    }
}

#[derive(Debug, Clone)]
pub struct GestureDebouncer {
    /// A commit was already issued for the current hold
    armed: bool,
    /// Consecutive active frames in the current hold
    active_streak: u32,
    /// Active frames required before committing (>= 1)
    stabilize_frames: u32,
}

impl Default for GestureDebouncer {
    fn default() -> Self {
        Self::new(1)
    }
}

impl GestureDebouncer {
    /// Creates a disarmed debouncer. `stabilize_frames` below 1 is treated as 1.
    pub fn new(stabilize_frames: u32) -> Self {
        Self {
            armed: false,
            active_streak: 0,
            stabilize_frames: stabilize_frames.max(1),
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn stabilize_frames(&self) -> u32 {
        self.stabilize_frames
    }

    /// Feeds one frame's posture.
    pub fn observe(&mut self, posture: &FingerPosture) -> DebounceOutcome {
        self.update(posture.is_click_pose())
    }

    /// Feeds one frame's gesture-active flag.
    pub fn update(&mut self, active: bool) -> DebounceOutcome {
        if !active {
            if self.armed {
                log::debug!("Click posture released, disarming");
            }
            self.armed = false;
            self.active_streak = 0;
            return DebounceOutcome::Idle;
        }

        self.active_streak = self.active_streak.saturating_add(1);

        if self.armed {
            DebounceOutcome::Suppressed
        } else if self.active_streak >= self.stabilize_frames {
            self.armed = true;
            DebounceOutcome::Commit
        } else {
            DebounceOutcome::Pending
        }
    }
}
