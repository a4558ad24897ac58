//! Proximity detection and move throttling

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// True iff the pointer is within `radius` of the element center (inclusive)
#[inline]
pub fn should_evade(pointer: Vec2, element_center: Vec2, radius: f32) -> bool {
    pointer.distance(element_center) <= radius
}

/// Rate limiter for dodges. Requests inside the interval are dropped, not queued.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cooldown {
    /// Monotonic timestamp (ms) of the last successful move
    last_move_ms: Option<f64>,
}

impl Cooldown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a move may happen at `now_ms`
    pub fn ready(&self, now_ms: f64, interval_ms: f64) -> bool {
        match self.last_move_ms {
            None => true,
            Some(last) => now_ms - last >= interval_ms,
        }
    }

    /// Record a successful move
    pub fn mark(&mut self, now_ms: f64) {
        self.last_move_ms = Some(now_ms);
    }

    pub fn last_move_ms(&self) -> Option<f64> {
        self.last_move_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_radius_is_inclusive() {
        let c = Vec2::new(100.0, 100.0);
        assert!(should_evade(Vec2::new(200.0, 100.0), c, 100.0));
        assert!(!should_evade(Vec2::new(200.1, 100.0), c, 100.0));
        assert!(should_evade(c, c, 0.0));
    }

    #[test]
    fn test_first_move_always_ready() {
        let cd = Cooldown::new();
        assert!(cd.ready(0.0, 280.0));
    }

    #[test]
    fn test_cooldown_interval() {
        let mut cd = Cooldown::new();
        cd.mark(1000.0);
        assert!(!cd.ready(1100.0, 280.0));
        assert!(!cd.ready(1279.9, 280.0));
        assert!(cd.ready(1280.0, 280.0));
        assert_eq!(cd.last_move_ms(), Some(1000.0));
    }

    proptest! {
        #[test]
        fn prop_far_pointer_never_triggers(
            cx in -1000.0f32..1000.0,
            cy in -1000.0f32..1000.0,
            angle in 0.0f32..std::f32::consts::TAU,
            extra in 0.5f32..500.0,
            radius in 1.0f32..300.0,
        ) {
            let center = Vec2::new(cx, cy);
            let pointer = center + Vec2::from_angle(angle) * (radius + extra);
            prop_assert!(!should_evade(pointer, center, radius));
        }
    }
}
