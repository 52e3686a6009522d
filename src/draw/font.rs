//! Font descriptor for label and typed-text rendering.

use crate::config::KeyboardConfig;

/// Describes which font to use, including family name, weight, and style.
///
/// The descriptor is shared by key labels and the typed-text panel so both
/// render with the same face; only the size differs per draw call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontDescriptor {
    /// Font family name (e.g., "Sans", "Monospace", "JetBrains Mono")
    pub family: String,

    /// Font weight (e.g., "normal", "bold", "light" or numeric 100-900)
    pub weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    pub style: String,
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self {
            family: "Sans".to_string(),
            weight: "bold".to_string(),
            style: "normal".to_string(),
        }
    }
}

impl FontDescriptor {
    pub fn new(family: String, weight: String, style: String) -> Self {
        Self {
            family,
            weight,
            style,
        }
    }

    pub fn from_config(config: &KeyboardConfig) -> Self {
        Self::new(
            config.font_family.clone(),
            config.font_weight.clone(),
            config.font_style.clone(),
        )
    }

    /// Converts this font descriptor to a Pango font description string.
    ///
    /// Format: "Family Style Weight Size", e.g. "Sans Bold 40".
    /// Sizes are given in pixels; Pango receives them with an explicit "px" suffix.
    pub fn to_pango_string(&self, size: f64) -> String {
        let mut parts = vec![self.family.clone()];

        if !self.style.eq_ignore_ascii_case("normal") {
            parts.push(capitalize_first(&self.style));
        }

        if !self.weight.eq_ignore_ascii_case("normal") {
            parts.push(capitalize_first(&self.weight));
        }

        parts.push(format!("{}px", size.round() as i32));

        parts.join(" ")
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}
