//! Runaway Button - a "no" button that won't be clicked
//!
//! Core modules:
//! - `evade`: Pure evasion logic (proximity, cooldown, placement planning)
//! - `confetti`: Celebration particle batches for the accept button
//! - `widget`: Stateful widget that applies input events to the layout
//! - `platform`: Layout/event abstractions (headless and browser)
//! - `settings`: Data-driven tuning

pub mod confetti;
pub mod evade;
pub mod platform;
pub mod settings;
pub mod widget;

pub use settings::{ConfettiSettings, Settings};
pub use widget::Widget;

/// Widget tuning defaults
pub mod consts {
    /// Pointer distance (px) from the button center that triggers a dodge
    pub const TRIGGER_RADIUS: f32 = 105.0;
    /// Minimum pointer distance a bounce candidate must reach.
    /// Smaller than the trigger radius: a dodge only needs to be a clear improvement.
    pub const CLEARANCE: f32 = 86.0;
    /// Minimum time between two dodges
    pub const MOVE_COOLDOWN_MS: f64 = 280.0;
    /// Gap kept between the button and the viewport edges
    pub const EDGE_PADDING: f32 = 16.0;

    /// How far (per axis) the button may wander from where it started
    pub const ROAM_RADIUS: f32 = 240.0;

    /// Directional bounce distance
    pub const BOUNCE_STEP: f32 = 150.0;
    /// Per-axis random jitter added to each bounce candidate
    pub const BOUNCE_JITTER: f32 = 36.0;
    /// Bounce candidates tried before falling back to orbit sampling
    pub const BOUNCE_TRIES: u32 = 45;

    /// Orbit samples around the original position
    pub const ORBIT_SAMPLES: u32 = 96;
    /// Upper limit for configured orbit samples (all run on the event thread)
    pub const MAX_ORBIT_SAMPLES: u32 = 1024;
    /// Smallest orbit radius as a fraction of the roam radius
    pub const ORBIT_MIN_SCALE: f32 = 0.35;

    /// Retreat distance as a fraction of the bounce step
    pub const RETREAT_SCALE: f32 = 0.5;

    /// Confetti defaults
    pub const CONFETTI_COUNT: u32 = 34;
    /// Upper limit for configured particles per batch
    pub const MAX_CONFETTI_COUNT: u32 = 500;
    pub const CONFETTI_DRIFT_PX: f32 = 40.0;
    pub const CONFETTI_MAX_DELAY_S: f32 = 1.2;
    pub const CONFETTI_MIN_DURATION_S: f32 = 2.6;
    pub const CONFETTI_DURATION_SPREAD_S: f32 = 2.2;
    /// Extra time before a finished particle is removed
    pub const CONFETTI_REMOVAL_BUFFER_S: f32 = 0.3;
}
