//! In-memory layout
//!
//! Stands in for the browser in the native binary and in tests. The clock is
//! manual: call [`HeadlessLayout::advance`] to move time forward, which also
//! expires finished particles.

use glam::Vec2;

use super::Layout;
use crate::confetti::Particle;
use crate::evade::Rect;

/// A spawned particle and the time it is due for removal
#[derive(Debug, Clone)]
pub struct LiveParticle {
    pub particle: Particle,
    pub remove_at_ms: f64,
}

#[derive(Debug, Clone)]
pub struct HeadlessLayout {
    pub element: Rect,
    pub obstacle: Rect,
    pub viewport: Vec2,
    pub now_ms: f64,
    /// Set on the first explicit position write
    pub positioned: bool,
    pub buttons_enabled: bool,
    pub buttons_visible: bool,
    pub success_visible: bool,
    pub particles: Vec<LiveParticle>,
    /// Total particle-creation requests received
    pub particles_spawned: usize,
    /// Every position written, oldest first
    pub writes: Vec<Vec2>,
}

impl HeadlessLayout {
    pub fn new(element: Rect, obstacle: Rect, viewport: Vec2) -> Self {
        Self {
            element,
            obstacle,
            viewport,
            now_ms: 0.0,
            positioned: false,
            buttons_enabled: true,
            buttons_visible: true,
            success_visible: false,
            particles: Vec::new(),
            particles_spawned: 0,
            writes: Vec::new(),
        }
    }

    /// A 1280x800 page with the two buttons side by side near the middle
    pub fn demo_page() -> Self {
        let viewport = Vec2::new(1280.0, 800.0);
        let size = Vec2::new(96.0, 44.0);
        let yes = Rect::from_center_size(Vec2::new(560.0, 420.0), size);
        let no = Rect::from_center_size(Vec2::new(720.0, 420.0), size);
        Self::new(no, yes, viewport)
    }

    /// Move the clock forward, removing particles whose lifetime has passed
    pub fn advance(&mut self, ms: f64) {
        self.now_ms += ms;
        let now = self.now_ms;
        self.particles.retain(|p| p.remove_at_ms > now);
    }

    pub fn resize(&mut self, viewport: Vec2) {
        self.viewport = viewport;
    }
}

impl Layout for HeadlessLayout {
    fn element_rect(&self) -> Rect {
        self.element
    }

    fn obstacle_rect(&self) -> Rect {
        self.obstacle
    }

    fn viewport(&self) -> Vec2 {
        self.viewport
    }

    fn now_ms(&self) -> f64 {
        self.now_ms
    }

    fn set_element_position(&mut self, top_left: Vec2) {
        self.positioned = true;
        self.element = Rect::from_ltwh(
            top_left.x,
            top_left.y,
            self.element.width(),
            self.element.height(),
        );
        self.writes.push(top_left);
    }

    fn disable_buttons(&mut self) {
        self.buttons_enabled = false;
        self.buttons_visible = false;
    }

    fn show_success(&mut self) {
        self.success_visible = true;
    }

    fn spawn_particle(&mut self, particle: &Particle) {
        self.particles_spawned += 1;
        self.particles.push(LiveParticle {
            particle: particle.clone(),
            remove_at_ms: self.now_ms + particle.lifetime_ms(),
        });
    }
}
