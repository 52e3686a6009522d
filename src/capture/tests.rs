use std::io::Cursor;

use super::{
    CaptureError, DetectorSettings, Frame, FrameSource, HandDetector, HandObservation,
    RecordedDetector, ReplaySource,
};
use crate::input::{HandPoint, LANDMARK_COUNT};
use crate::util::Point;

fn hand_json(score: f32, x: f32, y: f32) -> String {
    let points: Vec<String> = (0..LANDMARK_COUNT)
        .map(|_| format!("[{x},{y}]"))
        .collect();
    format!(r#"{{"score":{score},"landmarks":[{}]}}"#, points.join(","))
}

fn observation(score: f32, count: usize) -> HandObservation {
    HandObservation {
        score,
        landmarks: vec![[0.25, 0.5]; count],
    }
}

fn frame_with(observations: Vec<HandObservation>) -> Frame {
    Frame {
        index: 0,
        width: 1000,
        height: 800,
        observations,
    }
}

#[test]
fn replay_yields_frames_then_end_of_stream() {
    let recording = format!(
        "{{\"hands\":[{}]}}\n\n{{}}\n{{\"hands\":[]}}\n",
        hand_json(0.9, 0.5, 0.5)
    );
    let mut source = ReplaySource::from_reader(Cursor::new(recording), 640, 480).unwrap();

    let first = source.next_frame().unwrap().unwrap();
    assert_eq!(first.index, 0);
    assert_eq!((first.width, first.height), (640, 480));
    assert_eq!(first.observations.len(), 1);
    assert_eq!(first.observations[0].landmarks.len(), LANDMARK_COUNT);

    // Blank line skipped; `{}` is a frame without hands
    let second = source.next_frame().unwrap().unwrap();
    assert_eq!(second.index, 1);
    assert!(second.observations.is_empty());

    let third = source.next_frame().unwrap().unwrap();
    assert!(third.observations.is_empty());

    assert!(source.next_frame().unwrap().is_none());
    assert!(source.next_frame().unwrap().is_none());
    assert_eq!(source.frames_read(), 3);
}

#[test]
fn replay_reports_malformed_line_number() {
    let recording = "{}\n\nnot json\n";
    let mut source = ReplaySource::from_reader(Cursor::new(recording), 640, 480).unwrap();
    assert!(source.next_frame().unwrap().is_some());

    match source.next_frame() {
        Err(CaptureError::Malformed { line, .. }) => assert_eq!(line, 3),
        other => panic!("expected malformed error, got {other:?}"),
    }
}

#[test]
fn replay_rejects_zero_dimensions() {
    let result = ReplaySource::from_reader(Cursor::new(""), 0, 480);
    assert!(matches!(
        result,
        Err(CaptureError::InvalidDimensions {
            width: 0,
            height: 480
        })
    ));
}

#[test]
fn missing_score_counts_as_certain() {
    let line = format!(
        "{{\"hands\":[{{\"landmarks\":[{}]}}]}}",
        vec!["[0.1,0.1]"; LANDMARK_COUNT].join(",")
    );
    let mut source = ReplaySource::from_reader(Cursor::new(line), 100, 100).unwrap();
    let frame = source.next_frame().unwrap().unwrap();
    assert_eq!(frame.observations[0].score, 1.0);
}

fn unmirrored() -> RecordedDetector {
    RecordedDetector::new(DetectorSettings {
        mirror: false,
        ..DetectorSettings::default()
    })
}

#[test]
fn detector_converts_to_pixels() {
    let mut detector = unmirrored();
    let hands = detector.detect(&frame_with(vec![observation(0.95, LANDMARK_COUNT)]));
    assert_eq!(hands.len(), 1);
    assert_eq!(hands[0].point(HandPoint::IndexTip), Point::new(250, 400));
}

#[test]
fn detector_mirrors_horizontally() {
    let mut detector = RecordedDetector::default();
    let hands = detector.detect(&frame_with(vec![observation(0.95, LANDMARK_COUNT)]));
    assert_eq!(hands[0].point(HandPoint::Wrist), Point::new(1000 - 1 - 250, 400));
}

#[test]
fn detector_drops_low_confidence_and_malformed_hands() {
    let mut detector = RecordedDetector::default();
    let hands = detector.detect(&frame_with(vec![
        observation(0.5, LANDMARK_COUNT),
        observation(0.99, 20),
    ]));
    assert!(hands.is_empty());

    let mut nan = observation(0.99, LANDMARK_COUNT);
    nan.landmarks[8] = [f32::NAN, 0.5];
    assert!(detector.detect(&frame_with(vec![nan])).is_empty());
}

#[test]
fn detector_drops_out_of_range_landmarks() {
    let mut detector = RecordedDetector::default();

    let mut far_left = observation(0.99, LANDMARK_COUNT);
    far_left.landmarks[3] = [-1.0e10, 0.5];
    let mut far_below = observation(0.99, LANDMARK_COUNT);
    far_below.landmarks[20] = [0.5, 1.0e10];
    assert!(
        detector
            .detect(&frame_with(vec![far_left, far_below]))
            .is_empty()
    );

    // Slightly off-frame points are still usable; mirroring never overflows
    let mut near_edge = observation(0.99, LANDMARK_COUNT);
    near_edge.landmarks[0] = [-0.5, 1.5];
    let hands = detector.detect(&frame_with(vec![near_edge]));
    assert_eq!(hands.len(), 1);
    assert_eq!(hands[0].point(HandPoint::Wrist), Point::new(999 + 500, 1200));
}

#[test]
fn default_settings_match_default_config() {
    assert_eq!(
        DetectorSettings::default(),
        DetectorSettings::from_config(&crate::Config::default())
    );
}

#[test]
fn detector_limits_hand_count() {
    let mut detector = RecordedDetector::default();
    let hands = detector.detect(&frame_with(vec![
        observation(0.5, LANDMARK_COUNT),
        observation(0.9, LANDMARK_COUNT),
        observation(0.9, LANDMARK_COUNT),
    ]));
    assert_eq!(hands.len(), 1);

    let mut two = RecordedDetector::new(DetectorSettings {
        max_hands: 2,
        ..DetectorSettings::default()
    });
    assert_eq!(
        two.detect(&frame_with(vec![
            observation(0.9, LANDMARK_COUNT),
            observation(0.9, LANDMARK_COUNT),
            observation(0.9, LANDMARK_COUNT),
        ]))
        .len(),
        2
    );
}
