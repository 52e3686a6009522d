//! Hand landmark types delivered by the detector.
//!
//! Indices follow the common 21-point hand skeleton: 0 is the wrist, then four
//! points per finger from base to tip (thumb 1-4, index 5-8, middle 9-12,
//! ring 13-16, little 17-20).

use crate::util::Point;

/// Number of landmarks in one hand.
pub const LANDMARK_COUNT: usize = 21;

/// Anatomical landmark identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandPoint {
    Wrist = 0,
    ThumbCmc,
    ThumbMcp,
    ThumbIp,
    ThumbTip,
    IndexMcp,
    IndexPip,
    IndexDip,
    IndexTip,
    MiddleMcp,
    MiddlePip,
    MiddleDip,
    MiddleTip,
    RingMcp,
    RingPip,
    RingDip,
    RingTip,
    LittleMcp,
    LittlePip,
    LittleDip,
    LittleTip,
}

impl HandPoint {
    /// Position of this point in a landmark set (0-20).
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Bones of the hand skeleton drawn by the overlay: palm outline, then each
/// finger from base to tip.
pub const HAND_CONNECTIONS: [(HandPoint, HandPoint); 21] = {
    use HandPoint::*;
    [
        (Wrist, ThumbCmc),
        (ThumbCmc, IndexMcp),
        (IndexMcp, MiddleMcp),
        (MiddleMcp, RingMcp),
        (RingMcp, LittleMcp),
        (Wrist, LittleMcp),
        (ThumbCmc, ThumbMcp),
        (ThumbMcp, ThumbIp),
        (ThumbIp, ThumbTip),
        (IndexMcp, IndexPip),
        (IndexPip, IndexDip),
        (IndexDip, IndexTip),
        (MiddleMcp, MiddlePip),
        (MiddlePip, MiddleDip),
        (MiddleDip, MiddleTip),
        (RingMcp, RingPip),
        (RingPip, RingDip),
        (RingDip, RingTip),
        (LittleMcp, LittlePip),
        (LittlePip, LittleDip),
        (LittleDip, LittleTip),
    ]
};

/// One tracked point: its anatomical index and pixel position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Landmark {
    pub index: usize,
    pub position: Point,
}

/// The 21 landmarks of one detected hand for one frame.
///
/// Only complete, correctly ordered sets can be constructed; anything else is
/// treated by callers as "no hand".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandmarkSet {
    landmarks: Vec<Landmark>,
}

impl LandmarkSet {
    /// Accepts exactly 21 landmarks whose indices are 0..21 in order.
    pub fn new(landmarks: Vec<Landmark>) -> Option<Self> {
        let well_formed = landmarks.len() == LANDMARK_COUNT
            && landmarks.iter().enumerate().all(|(i, lm)| lm.index == i);
        well_formed.then_some(Self { landmarks })
    }

    /// Builds a set from positions listed in index order.
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let landmarks = points
            .into_iter()
            .enumerate()
            .map(|(index, position)| Landmark { index, position })
            .collect();
        Self::new(landmarks)
    }

    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }

    pub fn point(&self, which: HandPoint) -> Point {
        self.landmarks[which.index()].position
    }

    /// Endpoints of every skeleton bone, in [`HAND_CONNECTIONS`] order.
    pub fn bones(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        HAND_CONNECTIONS
            .iter()
            .map(|&(from, to)| (self.point(from), self.point(to)))
    }

    /// Vertical positions used by the click heuristic.
    pub fn posture(&self) -> FingerPosture {
        FingerPosture {
            index_tip_y: self.point(HandPoint::IndexTip).y,
            index_joint_y: self.point(HandPoint::IndexDip).y,
            middle_tip_y: self.point(HandPoint::MiddleTip).y,
            middle_joint_y: self.point(HandPoint::MiddleDip).y,
        }
    }
}

/// The four y-coordinates the gesture debouncer looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FingerPosture {
    pub index_tip_y: i32,
    pub index_joint_y: i32,
    pub middle_tip_y: i32,
    pub middle_joint_y: i32,
}

impl FingerPosture {
    /// Both index and middle fingertips sit above their lower joints.
    ///
    /// Image y grows downward, so "above" is a strictly smaller y.
    pub fn is_click_pose(&self) -> bool {
        self.index_tip_y < self.index_joint_y && self.middle_tip_y < self.middle_joint_y
    }
}
