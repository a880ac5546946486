use bevy::prelude::*;

use crate::gameplay::winner::RaceResult;
use crate::rendering::stage::Stage;

/// Text typed into the name field, not yet submitted.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct NameDraft {
    text: String,
    max_len: usize,
    /// Last add outcome shown under the field.
    pub feedback: Option<String>,
}

impl NameDraft {
    pub fn new(max_len: usize) -> Self {
        Self {
            text: String::new(),
            max_len,
            feedback: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Append printable characters; input past the length cap is dropped.
    pub fn push_str(&mut self, s: &str) -> bool {
        let mut changed = false;
        for c in s.chars().filter(|c| !c.is_control()) {
            if self.text.chars().count() >= self.max_len {
                break;
            }
            self.text.push(c);
            changed = true;
        }
        changed
    }

    pub fn backspace(&mut self) -> bool {
        self.text.pop().is_some()
    }

    /// Hand the draft over for submission and clear the field.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlButton {
    AddPlayer,
    Reset,
    Stage(Stage),
}

#[derive(Component)]
pub struct ControlPanel;

#[derive(Component)]
pub struct NameFieldText;

#[derive(Component)]
pub struct FeedbackText;

#[derive(Component)]
pub struct RosterText;

#[derive(Component)]
pub struct GravityLabel;

/// Track node of the gravity slider; carries `RelativeCursorPosition`.
#[derive(Component)]
pub struct GravitySlider;

#[derive(Component)]
pub struct GravityFill;

#[derive(Component)]
pub struct WinnerBanner;

#[derive(Component)]
pub struct FinishOrderText;

pub const BUTTON_IDLE: Color = Color::srgba(0.08, 0.08, 0.12, 0.85);
pub const BUTTON_HOVER: Color = Color::srgba(0.18, 0.18, 0.28, 0.9);
pub const BUTTON_PRESSED: Color = Color::srgba(0.30, 0.30, 0.45, 0.95);
pub const BUTTON_SELECTED: Color = Color::srgba(0.20, 0.35, 0.55, 0.95);

/// Map a cursor position relative to the slider track (top-left 0,0; bottom-right 1,1) to 0..=1.
pub fn slider_fraction(normalized: Vec2) -> f32 {
    normalized.x.clamp(0.0, 1.0)
}

pub fn banner_text(result: &RaceResult) -> String {
    result
        .winner()
        .map(|w| format!("{w} wins!"))
        .unwrap_or_default()
}

pub fn finish_order_text(result: &RaceResult) -> String {
    if result.finish_order().len() < 2 {
        return String::new();
    }
    result
        .finish_order()
        .iter()
        .enumerate()
        .map(|(i, n)| format!("{}. {n}", i + 1))
        .collect::<Vec<_>>()
        .join("   ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_respects_cap_and_control_chars() {
        let mut d = NameDraft::new(4);
        assert!(d.push_str("Em"));
        assert!(!d.push_str("\u{8}\r"));
        assert!(d.push_str("mab"));
        assert_eq!(d.text(), "Emma");
        assert!(!d.push_str("x"));
        assert!(d.backspace());
        assert_eq!(d.take(), "Emm");
        assert_eq!(d.text(), "");
        assert!(!d.backspace());
    }

    #[test]
    fn slider_maps_track_left_to_right() {
        assert_eq!(slider_fraction(Vec2::new(0.0, 0.5)), 0.0);
        assert_eq!(slider_fraction(Vec2::new(0.5, 0.3)), 0.5);
        assert_eq!(slider_fraction(Vec2::new(1.0, 0.0)), 1.0);
        // cursor dragged past either end
        assert_eq!(slider_fraction(Vec2::new(-0.2, 0.5)), 0.0);
        assert_eq!(slider_fraction(Vec2::new(1.4, 0.5)), 1.0);
    }

    #[test]
    fn banner_lists_winner_then_order() {
        let mut r = RaceResult::default();
        assert_eq!(banner_text(&r), "");
        r.record("aioli");
        assert_eq!(banner_text(&r), "aioli wins!");
        assert_eq!(finish_order_text(&r), "");
        r.record("MOa");
        assert_eq!(finish_order_text(&r), "1. aioli   2. MOa");
    }
}
