//! Evasion logic
//!
//! Pure geometry and decision making, no platform dependencies:
//! - Proximity test and cooldown (`detector`)
//! - Candidate selection (`planner`)
//! - Boxes and roam bounds (`rect`)
//! - Injectable randomness (`rng`)

pub mod detector;
pub mod planner;
pub mod rect;
pub mod rng;
pub mod state;

pub use detector::{Cooldown, should_evade};
pub use planner::{PlanRequest, Placement, Planner, Tier};
pub use rect::{Rect, RoamBounds};
pub use rng::{RandomSource, SequenceSource, seeded};
pub use state::{EvaderState, WidgetState};
