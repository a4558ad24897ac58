//! Widget tuning
//!
//! Every number the evasion and confetti logic uses lives here. Hosts may
//! override any subset of fields with a JSON document.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Confetti batch tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfettiSettings {
    /// Particles spawned per accept
    pub count: u32,
    /// Horizontal drift range (± px)
    pub drift_px: f32,
    /// Upper bound of the random start delay (seconds)
    pub max_delay_s: f32,
    /// Shortest fall duration (seconds)
    pub min_duration_s: f32,
    /// Random extra duration on top of `min_duration_s`
    pub duration_spread_s: f32,
    /// Time a particle lingers after its animation ends
    pub removal_buffer_s: f32,
}

impl Default for ConfettiSettings {
    fn default() -> Self {
        Self {
            count: CONFETTI_COUNT,
            drift_px: CONFETTI_DRIFT_PX,
            max_delay_s: CONFETTI_MAX_DELAY_S,
            min_duration_s: CONFETTI_MIN_DURATION_S,
            duration_spread_s: CONFETTI_DURATION_SPREAD_S,
            removal_buffer_s: CONFETTI_REMOVAL_BUFFER_S,
        }
    }
}

/// Widget settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Proximity ===
    pub trigger_radius: f32,
    pub clearance: f32,
    pub cooldown_ms: f64,

    // === Bounds ===
    pub edge_padding: f32,
    pub roam_radius: f32,

    // === Placement ===
    pub bounce_step: f32,
    pub bounce_jitter: f32,
    pub bounce_tries: u32,
    pub orbit_samples: u32,
    pub orbit_min_scale: f32,
    pub retreat_scale: f32,

    // === Celebration ===
    pub confetti: ConfettiSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            trigger_radius: TRIGGER_RADIUS,
            clearance: CLEARANCE,
            cooldown_ms: MOVE_COOLDOWN_MS,

            edge_padding: EDGE_PADDING,
            roam_radius: ROAM_RADIUS,

            bounce_step: BOUNCE_STEP,
            bounce_jitter: BOUNCE_JITTER,
            bounce_tries: BOUNCE_TRIES,
            orbit_samples: ORBIT_SAMPLES,
            orbit_min_scale: ORBIT_MIN_SCALE,
            retreat_scale: RETREAT_SCALE,

            confetti: ConfettiSettings::default(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }

    /// Parse settings from JSON, falling back to defaults on error
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring invalid settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Force values into ranges the planner can work with
    pub fn sanitized(mut self) -> Self {
        self.trigger_radius = self.trigger_radius.max(0.0);
        self.clearance = self.clearance.clamp(0.0, self.trigger_radius);
        self.cooldown_ms = self.cooldown_ms.max(0.0);
        self.edge_padding = self.edge_padding.max(0.0);
        self.roam_radius = self.roam_radius.max(0.0);
        self.bounce_step = self.bounce_step.max(0.0);
        self.bounce_jitter = self.bounce_jitter.abs();
        self.bounce_tries = self.bounce_tries.max(1);
        self.orbit_samples = self.orbit_samples.min(MAX_ORBIT_SAMPLES);
        self.orbit_min_scale = self.orbit_min_scale.clamp(0.0, 1.0);
        self.retreat_scale = self.retreat_scale.max(0.0);

        let c = &mut self.confetti;
        c.count = c.count.min(MAX_CONFETTI_COUNT);
        c.drift_px = c.drift_px.abs();
        c.max_delay_s = c.max_delay_s.max(0.0);
        c.min_duration_s = c.min_duration_s.max(0.0);
        c.duration_spread_s = c.duration_spread_s.max(0.0);
        c.removal_buffer_s = c.removal_buffer_s.max(0.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let s = Settings::from_json(r#"{ "cooldown_ms": 500, "confetti": { "count": 10 } }"#)
            .unwrap();
        assert_eq!(s.cooldown_ms, 500.0);
        assert_eq!(s.confetti.count, 10);
        assert_eq!(s.trigger_radius, TRIGGER_RADIUS);
        assert_eq!(s.confetti.drift_px, CONFETTI_DRIFT_PX);
    }

    #[test]
    fn test_clearance_never_exceeds_trigger_radius() {
        let s = Settings::from_json(r#"{ "trigger_radius": 50, "clearance": 80 }"#).unwrap();
        assert_eq!(s.clearance, 50.0);
    }

    #[test]
    fn test_zero_tries_bumped_to_one() {
        let s = Settings::from_json(r#"{ "bounce_tries": 0 }"#).unwrap();
        assert_eq!(s.bounce_tries, 1);
    }

    #[test]
    fn test_oversized_counts_are_capped() {
        let s = Settings::from_json(
            r#"{ "orbit_samples": 4000000000, "confetti": { "count": 1000000000 } }"#,
        )
        .unwrap();
        assert_eq!(s.orbit_samples, MAX_ORBIT_SAMPLES);
        assert_eq!(s.confetti.count, MAX_CONFETTI_COUNT);
    }

    #[test]
    fn test_invalid_json_falls_back() {
        assert_eq!(Settings::from_json_or_default("{ nope"), Settings::default());
    }
}
