//! Platform abstraction layer
//!
//! The widget never touches a UI toolkit directly. It reads and writes through
//! [`Layout`] and receives input through [`WidgetEvents`], which an
//! [`EventSource`] wires up:
//! - `headless`: in-memory layout and scripted events (native binary, tests)
//! - `web`: DOM layout and browser listeners (wasm32 only)

pub mod headless;
#[cfg(target_arch = "wasm32")]
pub mod web;

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;

use crate::confetti::Particle;
use crate::evade::Rect;

pub use headless::HeadlessLayout;

/// Rendering/layout collaborator
pub trait Layout {
    /// Live layout box of the dodging element
    fn element_rect(&self) -> Rect;
    /// Live layout box of the accept button
    fn obstacle_rect(&self) -> Rect;
    /// Viewport size (CSS px)
    fn viewport(&self) -> Vec2;
    /// Monotonic clock (ms)
    fn now_ms(&self) -> f64;

    /// Place the dodging element. The first call takes it out of normal flow.
    fn set_element_position(&mut self, top_left: Vec2);
    /// Disable and hide both buttons and their container
    fn disable_buttons(&mut self);
    /// Reveal the success message
    fn show_success(&mut self);
    /// Create a particle and schedule its removal after `particle.lifetime_ms()`
    fn spawn_particle(&mut self, particle: &Particle);
}

/// Input handlers
pub trait WidgetEvents {
    fn on_move(&mut self, pointer: Vec2);
    /// Returns true if the touch was near enough to be consumed
    /// (the host should suppress its default action)
    fn on_touch_start(&mut self, touch: Option<Vec2>) -> bool;
    fn on_resize(&mut self);
    fn on_accept(&mut self);
}

/// Something that delivers input to a handler
pub trait EventSource {
    type Error;

    fn attach<H: WidgetEvents + 'static>(&self, handler: Rc<RefCell<H>>)
    -> Result<(), Self::Error>;
}

/// A single recorded input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Move(Vec2),
    TouchStart(Option<Vec2>),
    Resize,
    Accept,
}

/// Deliver one event, returning the touch "consumed" flag (false otherwise)
pub fn dispatch<H: WidgetEvents + ?Sized>(handler: &mut H, event: InputEvent) -> bool {
    match event {
        InputEvent::Move(p) => {
            handler.on_move(p);
            false
        }
        InputEvent::TouchStart(touch) => handler.on_touch_start(touch),
        InputEvent::Resize => {
            handler.on_resize();
            false
        }
        InputEvent::Accept => {
            handler.on_accept();
            false
        }
    }
}

/// Replays a fixed list of events synchronously on attach
#[derive(Debug, Clone, Default)]
pub struct ScriptedEvents {
    events: Vec<InputEvent>,
}

impl ScriptedEvents {
    pub fn new(events: impl Into<Vec<InputEvent>>) -> Self {
        Self {
            events: events.into(),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }
}

impl EventSource for ScriptedEvents {
    type Error = std::convert::Infallible;

    fn attach<H: WidgetEvents + 'static>(
        &self,
        handler: Rc<RefCell<H>>,
    ) -> Result<(), Self::Error> {
        for &event in &self.events {
            dispatch(&mut *handler.borrow_mut(), event);
        }
        Ok(())
    }
}
