//! The stateful widget
//!
//! Applies input events to [`WidgetState`] and writes results through the
//! [`Layout`]. Every handler runs to completion synchronously.

use glam::Vec2;

use crate::confetti;
use crate::evade::{
    EvaderState, PlanRequest, Placement, Planner, RandomSource, RoamBounds, WidgetState,
    should_evade,
};
use crate::platform::{Layout, WidgetEvents};
use crate::settings::Settings;

/// Runaway button widget
pub struct Widget<L: Layout, R: RandomSource> {
    pub layout: L,
    rng: R,
    settings: Settings,
    planner: Planner,
    state: WidgetState,
}

impl<L: Layout, R: RandomSource> Widget<L, R> {
    pub fn new(layout: L, rng: R, settings: Settings) -> Self {
        let settings = settings.sanitized();
        Self {
            layout,
            rng,
            planner: Planner::from_settings(&settings),
            settings,
            state: WidgetState::new(),
        }
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Current element center: our own once captured, live layout before
    pub fn element_center(&self) -> Vec2 {
        match &self.state.evader {
            Some(evader) => evader.center,
            None => self.layout.element_rect().center(),
        }
    }

    /// Is the pointer close enough to trigger a dodge?
    pub fn is_near(&self, pointer: Vec2) -> bool {
        should_evade(pointer, self.element_center(), self.settings.trigger_radius)
    }

    /// Take the element out of flow, pinning it where it currently renders
    fn capture(&mut self) -> EvaderState {
        if let Some(evader) = self.state.evader {
            return evader;
        }
        let evader = EvaderState::capture(&self.layout.element_rect());
        self.layout.set_element_position(evader.top_left());
        self.state.evader = Some(evader);
        log::debug!(
            "Captured origin {:?} size {:?}",
            evader.start_center,
            evader.start_size
        );
        evader
    }

    /// Roam bounds for the current viewport.
    ///
    /// Warns once when the viewport becomes too small to hold the element,
    /// not on every resize while it stays that way.
    fn roam_bounds(&mut self, evader: &EvaderState) -> RoamBounds {
        let viewport = self.layout.viewport();
        let raw = evader.uncapped_bounds(viewport, &self.settings);
        let collapsed = raw.is_degenerate();
        if collapsed != self.state.bounds_collapsed {
            if collapsed {
                log::warn!(
                    "Viewport {}x{} too small for roam bounds {:?}; collapsing",
                    viewport.x,
                    viewport.y,
                    raw
                );
            } else {
                log::debug!("Roam bounds restored for viewport {}x{}", viewport.x, viewport.y);
            }
            self.state.bounds_collapsed = collapsed;
        }
        raw.capped()
    }

    /// Dodge away from `pointer` if the cooldown allows.
    ///
    /// Returns the placement, or `None` if the request was dropped.
    pub fn evade(&mut self, pointer: Vec2) -> Option<Placement> {
        let now = self.layout.now_ms();
        if !self.state.cooldown.ready(now, self.settings.cooldown_ms) {
            log::trace!("Dodge dropped (cooldown) at {:.1}ms", now);
            return None;
        }

        let evader = self.capture();
        let request = PlanRequest {
            pointer,
            current_center: evader.center,
            origin: evader.start_center,
            obstacle: self.layout.obstacle_rect(),
            bounds: self.roam_bounds(&evader),
            size: evader.start_size,
        };
        let placement = self.planner.plan(&request, &mut self.rng);

        self.layout
            .set_element_position(placement.top_left(evader.start_size));
        self.state.evader = Some(EvaderState {
            center: placement.center,
            ..evader
        });
        self.state.cooldown.mark(now);
        self.state.moves += 1;

        log::debug!(
            "Dodge #{} via {:?} to {:?}",
            self.state.moves,
            placement.tier,
            placement.center
        );
        Some(placement)
    }

    /// Pull the element back inside the (possibly resized) viewport
    pub fn adjust_to_viewport(&mut self) {
        let Some(evader) = self.state.evader else {
            return;
        };
        let bounds = self.roam_bounds(&evader);
        let center = bounds.clamp(evader.center);
        let evader = EvaderState { center, ..evader };
        self.layout.set_element_position(evader.top_left());
        self.state.evader = Some(evader);
    }

    /// Terminal transition: hide the buttons and throw confetti
    pub fn accept(&mut self) {
        self.layout.disable_buttons();
        self.layout.show_success();
        self.state.accepted = true;

        let batch = confetti::spawn_batch(&self.settings.confetti, &mut self.rng);
        for particle in &batch {
            self.layout.spawn_particle(particle);
        }
        log::info!("Accepted after {} dodges, {} particles", self.state.moves, batch.len());
    }
}

impl<L: Layout, R: RandomSource> WidgetEvents for Widget<L, R> {
    fn on_move(&mut self, pointer: Vec2) {
        if self.state.accepted || !self.is_near(pointer) {
            return;
        }
        self.evade(pointer);
    }

    fn on_touch_start(&mut self, touch: Option<Vec2>) -> bool {
        let Some(touch) = touch else {
            return false;
        };
        if self.state.accepted || !self.is_near(touch) {
            return false;
        }
        self.evade(touch);
        true
    }

    fn on_resize(&mut self) {
        self.adjust_to_viewport();
    }

    fn on_accept(&mut self) {
        self.accept();
    }
}
