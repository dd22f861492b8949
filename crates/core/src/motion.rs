use serde::{Deserialize, Serialize};

/// Easing-curve identifier, rendered as the CSS timing-function keyword.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
}

impl Easing {
    #[must_use]
    pub fn css_name(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseIn => "ease-in",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}

/// Timing for the bar's cosmetic transitions. Purely presentational: none of
/// the classification or clamping logic depends on these values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionConfig {
    /// Seconds the fill overlay takes to reach its new width.
    pub fill_duration_secs: f32,
    /// Seconds a dot takes to reach its new color.
    pub dot_duration_secs: f32,
    /// Extra delay on the current dot's color, to emphasize it.
    pub current_dot_delay_secs: f32,
    pub easing: Easing,
}

impl MotionConfig {
    /// CSS `transition` shorthand for the fill overlay's width.
    #[must_use]
    pub fn fill_transition(&self) -> String {
        format!("width {}s {}", self.fill_duration_secs, self.easing.css_name())
    }

    /// CSS `transition` shorthand for a dot's background color. The current
    /// dot starts slightly after the others.
    #[must_use]
    pub fn dot_transition(&self, is_current: bool) -> String {
        let delay = if is_current {
            self.current_dot_delay_secs
        } else {
            0.0
        };
        format!(
            "background-color {}s {} {}s",
            self.dot_duration_secs,
            self.easing.css_name(),
            delay
        )
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            fill_duration_secs: 0.5,
            dot_duration_secs: 0.2,
            current_dot_delay_secs: 0.2,
            easing: Easing::EaseInOut,
        }
    }
}
