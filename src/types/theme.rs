//! Positional colour themes for tool cards.
//!
//! Every tool gets one hue from a fixed palette based on its position in
//! the tool list. The hue expands into five Tailwind class tokens used by
//! the card, detail and use-case fragments.

use serde::Serialize;

/// Hues cycled through by position.
pub const HUES: [&str; 8] = [
    "blue", "green", "purple", "yellow", "pink", "cyan", "red", "orange",
];

/// Style tokens for one themed tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeTokens {
    /// Hue the tokens were derived from.
    pub hue: &'static str,
    /// Background gradient classes.
    pub gradient: String,
    /// Border colour class.
    pub border: String,
    /// Hover shadow class.
    pub shadow: String,
    /// Foreground text class.
    pub text: String,
    /// Button background classes.
    pub button: String,
}

impl ThemeTokens {
    /// Theme for the tool at `index` in the tool list.
    pub fn for_index(index: usize) -> Self {
        Self::for_hue(HUES[index % HUES.len()])
    }

    /// Build the token set for a named hue.
    pub fn for_hue(hue: &'static str) -> Self {
        Self {
            hue,
            gradient: format!("from-{hue}-900 via-gray-800 to-gray-900"),
            border: format!("border-{hue}-700"),
            shadow: format!("hover:shadow-{hue}-500/40"),
            text: format!("text-{hue}-300"),
            button: format!("bg-{hue}-700 hover:bg-{hue}-600"),
        }
    }

    /// Gradient, border and shadow joined for container elements.
    pub fn container_classes(&self) -> String {
        format!("{} {} {}", self.gradient, self.border, self.shadow)
    }
}
