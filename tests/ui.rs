use airtype::draw::{CairoSurface, FontDescriptor, RenderSurface};
use airtype::input::{HandPoint, InteractionState, LANDMARK_COUNT, LandmarkSet};
use airtype::layout::Layout;
use airtype::ui::{UiStyle, render_frame};
use airtype::util::Point;

const KEY_GRAY: [u8; 4] = [64, 64, 64, 255];
const HIGHLIGHT_GRAY: [u8; 4] = [128, 128, 128, 255];
const BACKDROP: [u8; 4] = [0, 0, 0, 255];

/// Hand hovering over H with every other landmark parked in the bottom-right corner.
fn hovering_hand() -> LandmarkSet {
    let mut points = vec![Point::new(1260, 700); LANDMARK_COUNT];
    points[HandPoint::IndexTip.index()] = Point::new(560, 160);
    LandmarkSet::from_points(points).unwrap()
}

fn render(hand: Option<&LandmarkSet>, surface: &mut CairoSurface) {
    let layout = Layout::default();
    let mut state = InteractionState::new(1);
    state.process_frame(&layout, hand);

    surface.begin_frame(0, 1280, 720).unwrap();
    render_frame(surface, &layout, &state, hand, &UiStyle::default()).unwrap();
}

#[test]
fn keyboard_and_panel_are_painted() {
    let mut surface = CairoSurface::new(1280, 720, FontDescriptor::default()).unwrap();
    render(None, &mut surface);

    // Corner of A, clear of its label
    assert_eq!(surface.pixel(52, 52), Some(KEY_GRAY));
    // Gap between A and Z
    assert_eq!(surface.pixel(140, 60), Some(BACKDROP));
    // Empty text panel
    assert_eq!(surface.pixel(1200, 670), Some(KEY_GRAY));
    // Below the panel
    assert_eq!(surface.pixel(640, 700), Some(BACKDROP));
}

#[test]
fn hovered_key_is_highlighted_and_landmarks_drawn() {
    let hand = hovering_hand();
    let mut surface = CairoSurface::new(1280, 720, FontDescriptor::default()).unwrap();
    render(Some(&hand), &mut surface);

    assert_eq!(surface.pixel(632, 232), Some(HIGHLIGHT_GRAY));
    // G stays idle
    assert_eq!(surface.pixel(532, 232), Some(KEY_GRAY));
    assert_eq!(surface.pixel(1260, 700), Some([0, 255, 0, 255]));
}

#[test]
fn labels_leave_ink_on_keys() {
    let mut surface = CairoSurface::new(1280, 720, FontDescriptor::default()).unwrap();
    render(None, &mut surface);

    // Somewhere inside the label area of A the fill is covered by white glyphs
    let inked = (60..110)
        .flat_map(|y| (70..110).map(move |x| (x, y)))
        .filter_map(|(x, y)| surface.pixel(x, y))
        .any(|px| px != KEY_GRAY);
    assert!(inked);
}

#[test]
fn presented_frames_are_png_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut surface = CairoSurface::new(1280, 720, FontDescriptor::default())
        .unwrap()
        .with_output_dir(dir.path());

    // render_frame presents
    render(None, &mut surface);

    let bytes = std::fs::read(dir.path().join("frame-000000.png")).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}
