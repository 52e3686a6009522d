//! UI rendering: keyboard, typed-text panel, landmark overlay

use crate::config::Config;
use crate::draw::{Color, DARK_GRAY, GRAY, GREEN, RenderSurface, WHITE};
use crate::input::{InteractionState, LandmarkSet};
use crate::layout::{Key, Layout};
use crate::util::Point;

// ============================================================================
// UI Layout Constants (not configurable)
// ============================================================================

/// Character label X offset from the key's left edge
const LABEL_OFFSET_X: i32 = 25;
/// Character label baseline offset from the key's top edge
const LABEL_OFFSET_Y: i32 = 60;
/// Special label X position as a fraction of key width (before the shift below)
const SPECIAL_LABEL_X_RATIO: f64 = 0.35;
/// Special label shift to the left after applying the ratio
const SPECIAL_LABEL_SHIFT_X: i32 = 50;
/// Special label baseline as a fraction of key height
const SPECIAL_LABEL_Y_RATIO: f64 = 0.65;

/// Text panel top-left corner
const TEXT_PANEL_TOP_LEFT: Point = Point::new(50, 580);
/// Text panel bottom-right corner
const TEXT_PANEL_BOTTOM_RIGHT: Point = Point::new(1235, 680);
/// Typed text baseline origin inside the panel
const TEXT_PANEL_TEXT_ORIGIN: Point = Point::new(60, 645);

/// Hand skeleton stroke width
const SKELETON_LINE_WIDTH: f64 = 2.0;

/// Resolved colors and sizes used by [`render_frame`].
#[derive(Debug, Clone, PartialEq)]
pub struct UiStyle {
    pub key_color: Color,
    pub highlight_color: Color,
    pub label_color: Color,
    pub label_font_size: f64,
    pub panel_color: Color,
    pub text_color: Color,
    pub text_font_size: f64,
    pub show_landmarks: bool,
    pub landmark_radius: i32,
    pub landmark_color: Color,
    pub show_skeleton: bool,
    pub skeleton_color: Color,
}

impl Default for UiStyle {
    fn default() -> Self {
        Self {
            key_color: DARK_GRAY,
            highlight_color: GRAY,
            label_color: WHITE,
            label_font_size: 40.0,
            panel_color: DARK_GRAY,
            text_color: WHITE,
            text_font_size: 40.0,
            show_landmarks: true,
            landmark_radius: 5,
            landmark_color: GREEN,
            show_skeleton: true,
            skeleton_color: WHITE,
        }
    }
}

impl UiStyle {
    /// Resolves color specs; unknown color names fall back to the defaults.
    pub fn from_config(config: &Config) -> Self {
        let defaults = Self::default();
        Self {
            key_color: config.keyboard.key_color.to_color_or(defaults.key_color),
            highlight_color: config
                .keyboard
                .highlight_color
                .to_color_or(defaults.highlight_color),
            label_color: config
                .keyboard
                .label_color
                .to_color_or(defaults.label_color),
            label_font_size: config.keyboard.label_font_size,
            panel_color: config
                .text_panel
                .panel_color
                .to_color_or(defaults.panel_color),
            text_color: config
                .text_panel
                .text_color
                .to_color_or(defaults.text_color),
            text_font_size: config.text_panel.font_size,
            show_landmarks: config.overlay.show_landmarks,
            landmark_radius: config.overlay.landmark_radius,
            landmark_color: config
                .overlay
                .landmark_color
                .to_color_or(defaults.landmark_color),
            show_skeleton: config.overlay.show_skeleton,
            skeleton_color: config
                .overlay
                .skeleton_color
                .to_color_or(defaults.skeleton_color),
        }
    }
}

/// Baseline origin of a key's label.
pub fn label_position(key: &Key) -> Point {
    let b = &key.bounds;
    if key.kind.is_special() {
        Point::new(
            b.x + (b.width as f64 * SPECIAL_LABEL_X_RATIO) as i32 - SPECIAL_LABEL_SHIFT_X,
            b.y + (b.height as f64 * SPECIAL_LABEL_Y_RATIO) as i32,
        )
    } else {
        Point::new(b.x + LABEL_OFFSET_X, b.y + LABEL_OFFSET_Y)
    }
}

/// Issues the full render instruction sequence for one frame.
///
/// Keys are drawn in layout order with the active key filled in the highlight
/// color, followed by the text panel, the skeleton and landmark dots of
/// `hand` (when enabled) and finally `present`. The caller is expected to have started the
/// frame with `begin_frame`.
pub fn render_frame<S: RenderSurface + ?Sized>(
    surface: &mut S,
    layout: &Layout,
    state: &InteractionState,
    hand: Option<&LandmarkSet>,
    style: &UiStyle,
) -> Result<(), crate::draw::RenderError> {
    let active = state.active_key_index();

    for (index, key) in layout.keys().iter().enumerate() {
        let fill = if active == Some(index) {
            style.highlight_color
        } else {
            style.key_color
        };
        surface.draw_rect(key.bounds.top_left(), key.bounds.bottom_right(), fill, true);
        surface.draw_text(
            label_position(key),
            &key.label,
            style.label_font_size,
            style.label_color,
        );
    }

    surface.draw_rect(
        TEXT_PANEL_TOP_LEFT,
        TEXT_PANEL_BOTTOM_RIGHT,
        style.panel_color,
        true,
    );
    surface.draw_text(
        TEXT_PANEL_TEXT_ORIGIN,
        state.text().as_str(),
        style.text_font_size,
        style.text_color,
    );

    if style.show_landmarks {
        if let Some(hand) = hand {
            if style.show_skeleton {
                for (start, end) in hand.bones() {
                    surface.draw_line(start, end, style.skeleton_color, SKELETON_LINE_WIDTH);
                }
            }
            for landmark in hand.landmarks() {
                surface.draw_circle(
                    landmark.position,
                    style.landmark_radius,
                    style.landmark_color,
                    true,
                );
            }
        }
    }

    surface.present()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ColorSpec;
    use crate::draw::{CommandRecorder, DrawCommand, RED};
    use crate::input::{HAND_CONNECTIONS, LANDMARK_COUNT};

    fn render(
        state: &InteractionState,
        hand: Option<&LandmarkSet>,
        style: &UiStyle,
    ) -> Vec<DrawCommand> {
        let mut recorder = CommandRecorder::new();
        recorder.begin_frame(0, 1280, 720).unwrap();
        render_frame(&mut recorder, &Layout::default(), state, hand, style).unwrap();
        recorder.last_frame().to_vec()
    }

    fn hand_at(point: Point) -> LandmarkSet {
        LandmarkSet::from_points(std::iter::repeat_n(point, LANDMARK_COUNT)).unwrap()
    }

    #[test]
    fn idle_frame_draws_keys_panel_then_presents() {
        let state = InteractionState::new(1);
        let commands = render(&state, None, &UiStyle::default());

        // Two commands per key, two for the panel, then present
        assert_eq!(commands.len(), 38 * 2 + 2 + 1);
        assert_eq!(
            commands[0],
            DrawCommand::Rect {
                top_left: Point::new(50, 50),
                bottom_right: Point::new(135, 135),
                color: DARK_GRAY,
                filled: true,
            }
        );
        assert_eq!(
            commands[1],
            DrawCommand::Text {
                position: Point::new(75, 110),
                text: "A".into(),
                font_size: 40.0,
                color: WHITE,
            }
        );
        assert_eq!(
            commands[76],
            DrawCommand::Rect {
                top_left: Point::new(50, 580),
                bottom_right: Point::new(1235, 680),
                color: DARK_GRAY,
                filled: true,
            }
        );
        assert!(matches!(
            &commands[77],
            DrawCommand::Text { position, text, .. } if *position == Point::new(60, 645) && text.is_empty()
        ));
        assert_eq!(commands.last(), Some(&DrawCommand::Present));
    }

    #[test]
    fn active_key_is_highlighted_in_place() {
        let layout = Layout::default();
        let mut state = InteractionState::new(1);
        let tip = Point::new(560, 160);
        state.process_frame(&layout, Some(&hand_at(tip)));
        assert_eq!(state.active_key_index(), Some(17));

        let style = UiStyle {
            show_landmarks: false,
            ..UiStyle::default()
        };
        let commands = render(&state, None, &style);
        let highlighted: Vec<usize> = commands
            .iter()
            .enumerate()
            .filter(|(_, c)| matches!(c, DrawCommand::Rect { color, .. } if *color == GRAY))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(highlighted, vec![17 * 2]);
    }

    #[test]
    fn special_labels_use_proportional_offsets() {
        let layout = Layout::default();
        let space = layout.keys().iter().find(|k| k.label == "Space").unwrap();
        let delete = layout.keys().iter().find(|k| k.label == "Delete").unwrap();

        // 50 + trunc(885 * 0.35) - 50, 350 + trunc(85 * 0.65)
        assert_eq!(label_position(space), Point::new(309, 405));
        // 950 + trunc(285 * 0.35) - 50
        assert_eq!(label_position(delete), Point::new(999, 405));
    }

    #[test]
    fn skeleton_and_landmarks_are_drawn_after_panel() {
        let state = InteractionState::new(1);
        let hand = hand_at(Point::new(5, 5));
        let commands = render(&state, Some(&hand), &UiStyle::default());

        let overlay = &commands[78..commands.len() - 1];
        assert_eq!(overlay.len(), HAND_CONNECTIONS.len() + LANDMARK_COUNT);
        assert!(
            overlay[..HAND_CONNECTIONS.len()]
                .iter()
                .all(|c| matches!(c, DrawCommand::Line { color, thickness, .. } if *color == WHITE && *thickness == 2.0))
        );
        assert!(
            overlay[HAND_CONNECTIONS.len()..]
                .iter()
                .all(|c| matches!(c, DrawCommand::Circle { radius: 5, color, .. } if *color == GREEN))
        );

        let dots_only = UiStyle {
            show_skeleton: false,
            ..UiStyle::default()
        };
        let commands = render(&state, Some(&hand), &dots_only);
        assert!(!commands.iter().any(|c| matches!(c, DrawCommand::Line { .. })));
        assert_eq!(commands.len(), 79 + LANDMARK_COUNT);

        let hidden = UiStyle {
            show_landmarks: false,
            ..UiStyle::default()
        };
        assert_eq!(render(&state, Some(&hand), &hidden).len(), 79);
    }

    #[test]
    fn style_resolves_config_colors() {
        let mut config = Config::default();
        config.keyboard.highlight_color = ColorSpec::Name("red".into());
        config.keyboard.key_color = ColorSpec::Name("chartreuse-ish".into());

        let style = UiStyle::from_config(&config);
        assert_eq!(style.highlight_color, RED);
        assert_eq!(style.key_color, DARK_GRAY);
        assert_eq!(
            style,
            UiStyle {
                highlight_color: RED,
                ..UiStyle::default()
            }
        );
    }
}
