//! Placement planning
//!
//! Picks the next center for the dodging element. Three tiers, tried in order:
//!
//! 1. **Bounce** - step away from the pointer along the pointer→center
//!    direction with a little jitter. Needs to clear the obstacle and land at
//!    least `clearance` from the pointer.
//! 2. **Orbit** - sample points on random ellipses around the *original*
//!    position and keep the non-overlapping one farthest from the pointer.
//!    Anchoring to the origin stops the element drifting into a corner.
//! 3. **Retreat** - a short clamped step away from the pointer with no checks.
//!    Always succeeds, possibly overlapping the obstacle.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::{Rect, RoamBounds};
use super::rng::RandomSource;
use crate::settings::Settings;

/// Which tier produced a placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    Bounce,
    Orbit,
    Retreat,
}

/// Everything the planner needs to know about one dodge
#[derive(Debug, Clone, Copy)]
pub struct PlanRequest {
    pub pointer: Vec2,
    pub current_center: Vec2,
    /// Center captured before the first move
    pub origin: Vec2,
    pub obstacle: Rect,
    pub bounds: RoamBounds,
    pub size: Vec2,
}

/// Planner output
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub center: Vec2,
    pub tier: Tier,
}

impl Placement {
    /// Top-left corner for an element of `size` centered here
    pub fn top_left(&self, size: Vec2) -> Vec2 {
        self.center - size / 2.0
    }
}

/// Tuning for the three tiers
#[derive(Debug, Clone)]
pub struct Planner {
    pub clearance: f32,
    pub roam_radius: f32,
    pub bounce_step: f32,
    pub bounce_jitter: f32,
    pub bounce_tries: u32,
    pub orbit_samples: u32,
    pub orbit_min_scale: f32,
    pub retreat_scale: f32,
}

impl Planner {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            clearance: settings.clearance,
            roam_radius: settings.roam_radius,
            bounce_step: settings.bounce_step,
            bounce_jitter: settings.bounce_jitter,
            bounce_tries: settings.bounce_tries,
            orbit_samples: settings.orbit_samples,
            orbit_min_scale: settings.orbit_min_scale,
            retreat_scale: settings.retreat_scale,
        }
    }

    /// Choose the next center. Never fails; the result is always inside `bounds`.
    pub fn plan(&self, req: &PlanRequest, rng: &mut impl RandomSource) -> Placement {
        let dir = away_from(req.pointer, req.current_center);

        if let Some(center) = self.bounce(req, dir, rng) {
            return Placement {
                center,
                tier: Tier::Bounce,
            };
        }
        if let Some(center) = self.orbit(req, rng) {
            return Placement {
                center,
                tier: Tier::Orbit,
            };
        }
        Placement {
            center: self.retreat(req, dir),
            tier: Tier::Retreat,
        }
    }

    fn bounce(&self, req: &PlanRequest, dir: Vec2, rng: &mut impl RandomSource) -> Option<Vec2> {
        let target = req.current_center + dir * self.bounce_step;
        let j = self.bounce_jitter;

        (0..self.bounce_tries).find_map(|_| {
            let jitter = Vec2::new(rng.range(-j, j), rng.range(-j, j));
            let candidate = req.bounds.clamp(target + jitter);
            let clear = !blocked(candidate, req)
                && candidate.distance(req.pointer) >= self.clearance;
            clear.then_some(candidate)
        })
    }

    fn orbit(&self, req: &PlanRequest, rng: &mut impl RandomSource) -> Option<Vec2> {
        let r_max = self.roam_radius;
        let r_min = r_max * self.orbit_min_scale;

        let mut best: Option<(Vec2, f32)> = None;
        for _ in 0..self.orbit_samples {
            let angle = rng.range(0.0, std::f32::consts::TAU);
            let radii = Vec2::new(rng.range(r_min, r_max), rng.range(r_min, r_max));
            let candidate = req.bounds.clamp(req.origin + Vec2::from_angle(angle) * radii);
            if blocked(candidate, req) {
                continue;
            }
            let dist = candidate.distance(req.pointer);
            if best.is_none_or(|(_, d)| dist > d) {
                best = Some((candidate, dist));
            }
        }
        best.map(|(p, _)| p)
    }

    fn retreat(&self, req: &PlanRequest, dir: Vec2) -> Vec2 {
        let step = self.bounce_step * self.retreat_scale;
        req.bounds.clamp(req.current_center + dir * step)
    }
}

/// Unit vector from the pointer toward the center, `+X` if they coincide
fn away_from(pointer: Vec2, center: Vec2) -> Vec2 {
    (center - pointer).try_normalize().unwrap_or(Vec2::X)
}

fn blocked(center: Vec2, req: &PlanRequest) -> bool {
    Rect::from_center_size(center, req.size).overlaps(&req.obstacle)
}
