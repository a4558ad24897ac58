//! Widget state
//!
//! Everything that survives between events lives here, owned by a single
//! [`crate::Widget`]. Nothing is global.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::detector::Cooldown;
use super::rect::{Rect, RoamBounds};
use crate::settings::Settings;

/// The dodging element once it has been taken out of normal flow
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaderState {
    /// Center before the first move. Never recaptured.
    pub start_center: Vec2,
    /// Size at capture time. Treated as fixed from then on.
    pub start_size: Vec2,
    /// Center last written to the layout
    pub center: Vec2,
}

impl EvaderState {
    /// Capture from the element's live layout box
    pub fn capture(rect: &Rect) -> Self {
        let center = rect.center();
        Self {
            start_center: center,
            start_size: rect.size(),
            center,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_center_size(self.center, self.start_size)
    }

    pub fn top_left(&self) -> Vec2 {
        self.center - self.start_size / 2.0
    }

    /// Roam bounds for the current viewport
    pub fn bounds(&self, viewport: Vec2, settings: &Settings) -> RoamBounds {
        self.uncapped_bounds(viewport, settings).capped()
    }

    /// Roam bounds before inverted axes are collapsed
    pub fn uncapped_bounds(&self, viewport: Vec2, settings: &Settings) -> RoamBounds {
        RoamBounds::uncapped(
            viewport,
            self.start_size,
            settings.edge_padding,
            self.start_center,
            settings.roam_radius,
        )
    }
}

/// Complete widget state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WidgetState {
    /// `None` until the first dodge
    pub evader: Option<EvaderState>,
    pub cooldown: Cooldown,
    /// Terminal: set once the accept button fires
    pub accepted: bool,
    /// Dodges performed (diagnostics)
    pub moves: u32,
    /// Roam bounds were inverted the last time they were computed
    #[serde(default)]
    pub bounds_collapsed: bool,
}

impl WidgetState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_captured(&self) -> bool {
        self.evader.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_from_layout_box() {
        let e = EvaderState::capture(&Rect::from_ltwh(100.0, 200.0, 80.0, 40.0));
        assert_eq!(e.start_center, Vec2::new(140.0, 220.0));
        assert_eq!(e.start_size, Vec2::new(80.0, 40.0));
        assert_eq!(e.center, e.start_center);
        assert_eq!(e.top_left(), Vec2::new(100.0, 200.0));
    }

    #[test]
    fn test_state_serializes() {
        let mut state = WidgetState::new();
        state.evader = Some(EvaderState::capture(&Rect::from_ltwh(0.0, 0.0, 10.0, 10.0)));
        state.cooldown.mark(42.0);
        let json = serde_json::to_string(&state).unwrap();
        let back: WidgetState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.evader, state.evader);
        assert_eq!(back.cooldown.last_move_ms(), Some(42.0));
    }
}
