//! Configuration type definitions.

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Camera frame settings.
///
/// Landmark pixel coordinates and key geometry share this frame space.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CameraConfig {
    /// Frame width in pixels (valid range: 320 - 4096)
    #[serde(default = "default_camera_width")]
    pub width: u32,

    /// Frame height in pixels (valid range: 240 - 4096)
    #[serde(default = "default_camera_height")]
    pub height: u32,

    /// Flip the frame horizontally so the overlay behaves like a mirror
    #[serde(default = "default_mirror")]
    pub mirror: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            width: default_camera_width(),
            height: default_camera_height(),
            mirror: default_mirror(),
        }
    }
}

/// Hand detector settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DetectorConfig {
    /// Minimum detection score for a hand to be used (valid range: 0.0 - 1.0)
    #[serde(default = "default_min_detection_confidence")]
    pub min_detection_confidence: f32,

    /// Maximum hands reported per frame (valid range: 1 - 4).
    /// Only the first hand drives the keyboard.
    #[serde(default = "default_max_hands")]
    pub max_hands: usize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            min_detection_confidence: default_min_detection_confidence(),
            max_hands: default_max_hands(),
        }
    }
}

/// Click gesture settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GestureConfig {
    /// Consecutive frames the click posture must hold before a key is typed
    /// (valid range: 1 - 10). 1 commits on the first frame of the gesture.
    #[serde(default = "default_stabilize_frames")]
    pub stabilize_frames: u32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            stabilize_frames: default_stabilize_frames(),
        }
    }
}

/// Keyboard appearance.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct KeyboardConfig {
    /// Fill color of idle keys
    #[serde(default = "default_key_color")]
    pub key_color: ColorSpec,

    /// Fill color of the key under the fingertip
    #[serde(default = "default_highlight_color")]
    pub highlight_color: ColorSpec,

    /// Key label color
    #[serde(default = "default_label_color")]
    pub label_color: ColorSpec,

    /// Key label size in points (valid range: 8.0 - 96.0)
    #[serde(default = "default_font_size")]
    pub label_font_size: f64,

    /// Font family name for labels and typed text (e.g., "Sans", "Monospace")
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font weight (e.g., "normal", "bold", "light", 400, 700)
    #[serde(default = "default_font_weight")]
    pub font_weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    #[serde(default = "default_font_style")]
    pub font_style: String,
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            key_color: default_key_color(),
            highlight_color: default_highlight_color(),
            label_color: default_label_color(),
            label_font_size: default_font_size(),
            font_family: default_font_family(),
            font_weight: default_font_weight(),
            font_style: default_font_style(),
        }
    }
}

/// Typed-text panel appearance.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TextPanelConfig {
    /// Panel fill color
    #[serde(default = "default_key_color")]
    pub panel_color: ColorSpec,

    /// Typed text color
    #[serde(default = "default_label_color")]
    pub text_color: ColorSpec,

    /// Typed text size in points (valid range: 8.0 - 96.0)
    #[serde(default = "default_font_size")]
    pub font_size: f64,
}

impl Default for TextPanelConfig {
    fn default() -> Self {
        Self {
            panel_color: default_key_color(),
            text_color: default_label_color(),
            font_size: default_font_size(),
        }
    }
}

/// Landmark overlay settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct OverlayConfig {
    /// Draw a dot on every landmark of the tracked hand
    #[serde(default = "default_show_landmarks")]
    pub show_landmarks: bool,

    /// Dot radius in pixels (valid range: 1 - 20)
    #[serde(default = "default_landmark_radius")]
    pub landmark_radius: i32,

    /// Dot color
    #[serde(default = "default_landmark_color")]
    pub landmark_color: ColorSpec,

    /// Connect the landmarks with the hand skeleton (only while dots are shown)
    #[serde(default = "default_show_skeleton")]
    pub show_skeleton: bool,

    /// Skeleton line color
    #[serde(default = "default_skeleton_color")]
    pub skeleton_color: ColorSpec,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            show_landmarks: default_show_landmarks(),
            landmark_radius: default_landmark_radius(),
            landmark_color: default_landmark_color(),
            show_skeleton: default_show_skeleton(),
            skeleton_color: default_skeleton_color(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_camera_width() -> u32 {
    1280
}

fn default_camera_height() -> u32 {
    720
}

fn default_mirror() -> bool {
    true
}

fn default_min_detection_confidence() -> f32 {
    0.8
}

fn default_max_hands() -> usize {
    1
}

fn default_stabilize_frames() -> u32 {
    1
}

fn default_key_color() -> ColorSpec {
    ColorSpec::Rgb([64, 64, 64])
}

fn default_highlight_color() -> ColorSpec {
    ColorSpec::Rgb([128, 128, 128])
}

fn default_label_color() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_font_size() -> f64 {
    40.0
}

fn default_font_family() -> String {
    "Sans".to_string()
}

fn default_font_weight() -> String {
    "bold".to_string()
}

fn default_font_style() -> String {
    "normal".to_string()
}

fn default_show_landmarks() -> bool {
    true
}

fn default_landmark_radius() -> i32 {
    5
}

fn default_landmark_color() -> ColorSpec {
    ColorSpec::Name("green".to_string())
}

fn default_show_skeleton() -> bool {
    true
}

fn default_skeleton_color() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}
