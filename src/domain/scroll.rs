use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter};

/// Scroll cosmetics tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Vertical offset (px) above which the scroll-to-top button shows
    pub show_threshold_px: f64,
    /// Delay before the faded-out button is taken out of layout
    pub hide_delay_ms: u32,
    /// Visible share of a `.reveal` element that triggers it
    pub reveal_threshold: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self { show_threshold_px: 300.0, hide_delay_ms: 300, reveal_threshold: 0.1 }
    }
}

/// CSS classes toggled on the scroll-to-top button
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, AsRefStr)]
pub enum ScrollTopClass {
    #[strum(serialize = "hidden")]
    Hidden,
    #[strum(serialize = "opacity-0")]
    Transparent,
    #[strum(serialize = "translate-y-4")]
    Lowered,
}

/// Class added to `.reveal` elements once they enter the viewport
pub const REVEAL_ACTIVE_CLASS: &str = "active";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTopAction {
    /// Remove every `ScrollTopClass`
    Show,
    /// Fade out now, then re-check after `hide_delay_ms`
    FadeOut,
}

impl ScrollConfig {
    pub fn action_for(&self, offset: f64) -> ScrollTopAction {
        if offset > self.show_threshold_px {
            ScrollTopAction::Show
        } else {
            ScrollTopAction::FadeOut
        }
    }

    /// After the fade delay: hide only if the page is still near the top
    pub fn should_hide_after_fade(&self, offset: f64) -> bool {
        offset < self.show_threshold_px
    }
}

/// Classes added when fading out
pub fn fade_out_classes() -> [ScrollTopClass; 2] {
    [ScrollTopClass::Transparent, ScrollTopClass::Lowered]
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn button_shows_strictly_past_threshold() {
        let config = ScrollConfig::default();
        assert_eq!(config.action_for(301.0), ScrollTopAction::Show);
        assert_eq!(config.action_for(300.0), ScrollTopAction::FadeOut);
        assert_eq!(config.action_for(0.0), ScrollTopAction::FadeOut);
    }

    #[test]
    fn exactly_at_threshold_fades_but_does_not_hide() {
        let config = ScrollConfig::default();
        assert_eq!(config.action_for(300.0), ScrollTopAction::FadeOut);
        assert!(!config.should_hide_after_fade(300.0));
        assert!(config.should_hide_after_fade(120.0));
    }

    #[test]
    fn class_names_match_stylesheet() {
        let names: Vec<String> = ScrollTopClass::iter().map(|c| c.as_ref().to_string()).collect();
        assert_eq!(names, vec!["hidden", "opacity-0", "translate-y-4"]);
        assert!(!fade_out_classes().contains(&ScrollTopClass::Hidden));
    }
}
