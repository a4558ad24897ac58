//! Celebration confetti
//!
//! Each particle is a falling heart with randomised position, drift, delay
//! and duration. The host renders it and removes it after [`Particle::lifetime_ms`].

use serde::Serialize;

use crate::evade::RandomSource;
use crate::settings::ConfettiSettings;

/// Glyphs a particle may show
pub const HEART_GLYPHS: [&str; 5] = ["💖", "💗", "💘", "❤️", "💕"];

/// A single particle-creation request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Particle {
    /// Horizontal start position, percent of the layer width
    pub left_pct: f32,
    /// Horizontal drift over the fall (px)
    pub drift_px: f32,
    pub delay_s: f32,
    pub duration_s: f32,
    pub glyph: &'static str,
    /// Time after the animation ends before removal
    pub removal_buffer_s: f32,
}

impl Particle {
    /// Time from creation until the particle should be removed
    pub fn lifetime_ms(&self) -> f64 {
        f64::from(self.duration_s + self.delay_s + self.removal_buffer_s) * 1000.0
    }
}

/// Roll one particle
pub fn spawn(settings: &ConfettiSettings, rng: &mut impl RandomSource) -> Particle {
    Particle {
        left_pct: rng.range(0.0, 100.0),
        drift_px: rng.range(-settings.drift_px, settings.drift_px),
        delay_s: rng.range(0.0, settings.max_delay_s),
        duration_s: rng.range(
            settings.min_duration_s,
            settings.min_duration_s + settings.duration_spread_s,
        ),
        glyph: HEART_GLYPHS[rng.index(HEART_GLYPHS.len())],
        removal_buffer_s: settings.removal_buffer_s,
    }
}

/// Roll a full batch of `settings.count` particles
pub fn spawn_batch(settings: &ConfettiSettings, rng: &mut impl RandomSource) -> Vec<Particle> {
    (0..settings.count).map(|_| spawn(settings, rng)).collect()
}
