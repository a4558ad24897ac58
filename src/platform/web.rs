//! Browser platform
//!
//! Expects this markup:
//! - `#yes-btn`, `#no-btn` buttons inside `#button-area`
//! - `#success-message` (hidden until accept)
//! - `#confetti-layer` container for hearts
//!
//! Optional tuning JSON may be put on the no button as `data-evade`.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, MouseEvent, TouchEvent, Window};

use super::{EventSource, Layout, WidgetEvents};
use crate::confetti::Particle;
use crate::evade::Rect;
use crate::settings::Settings;

fn by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{id}")))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("#{id} has unexpected type")))
}

fn rect_of(element: &Element) -> Rect {
    let r = element.get_bounding_client_rect();
    Rect::from_ltwh(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}

/// DOM-backed layout
pub struct DomLayout {
    window: Window,
    document: Document,
    yes: HtmlButtonElement,
    no: HtmlButtonElement,
    button_area: HtmlElement,
    success: HtmlElement,
    confetti_layer: HtmlElement,
}

impl DomLayout {
    pub fn from_document() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        Ok(Self {
            yes: by_id(&document, "yes-btn")?,
            no: by_id(&document, "no-btn")?,
            button_area: by_id(&document, "button-area")?,
            success: by_id(&document, "success-message")?,
            confetti_layer: by_id(&document, "confetti-layer")?,
            window,
            document,
        })
    }

    /// Settings from the no button's `data-evade` attribute, or defaults
    pub fn settings(&self) -> Settings {
        match self.no.get_attribute("data-evade") {
            Some(json) => Settings::from_json_or_default(&json),
            None => Settings::default(),
        }
    }

    /// The accept button, for click wiring
    pub fn accept_button(&self) -> &HtmlButtonElement {
        &self.yes
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    fn make_heart(&self, particle: &Particle) -> Result<Element, JsValue> {
        let heart: HtmlElement = self.document.create_element("span")?.dyn_into()?;
        heart.set_class_name("confetti-heart");
        heart.set_text_content(Some(particle.glyph));

        let style = heart.style();
        style.set_property("left", &format!("{}%", particle.left_pct))?;
        style.set_property("--drift", &format!("{}px", particle.drift_px))?;
        style.set_property("--delay", &format!("{}s", particle.delay_s))?;
        style.set_property("--duration", &format!("{}s", particle.duration_s))?;

        self.confetti_layer.append_child(&heart)?;
        Ok(heart.into())
    }
}

impl Layout for DomLayout {
    fn element_rect(&self) -> Rect {
        rect_of(&self.no)
    }

    fn obstacle_rect(&self) -> Rect {
        rect_of(&self.yes)
    }

    fn viewport(&self) -> Vec2 {
        let w = self.window.inner_width().ok().and_then(|v| v.as_f64());
        let h = self.window.inner_height().ok().and_then(|v| v.as_f64());
        Vec2::new(w.unwrap_or(0.0) as f32, h.unwrap_or(0.0) as f32)
    }

    fn now_ms(&self) -> f64 {
        self.window
            .performance()
            .map(|p| p.now())
            .unwrap_or_else(js_sys::Date::now)
    }

    fn set_element_position(&mut self, top_left: Vec2) {
        let style = self.no.style();
        let _ = style.set_property("transform", "none");
        let _ = style.set_property("left", &format!("{}px", top_left.x));
        let _ = style.set_property("top", &format!("{}px", top_left.y));
    }

    fn disable_buttons(&mut self) {
        self.yes.set_disabled(true);
        self.no.set_disabled(true);
        self.yes.set_hidden(true);
        self.no.set_hidden(true);
        self.button_area.set_hidden(true);
    }

    fn show_success(&mut self) {
        if let Some(body) = self.document.body() {
            let _ = body.class_list().add_1("success");
        }
        self.success.set_hidden(false);
    }

    fn spawn_particle(&mut self, particle: &Particle) {
        let heart = match self.make_heart(particle) {
            Ok(heart) => heart,
            Err(e) => {
                log::warn!("Failed to create confetti: {:?}", e);
                return;
            }
        };
        let closure = Closure::once(move || heart.remove());
        let _ = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                particle.lifetime_ms() as i32,
            );
        closure.forget();
    }
}

/// Browser input listeners
pub struct DomEvents {
    window: Window,
    accept: HtmlButtonElement,
}

impl DomEvents {
    pub fn new(layout: &DomLayout) -> Self {
        Self {
            window: layout.window().clone(),
            accept: layout.accept_button().clone(),
        }
    }
}

impl EventSource for DomEvents {
    type Error = JsValue;

    fn attach<H: WidgetEvents + 'static>(&self, handler: Rc<RefCell<H>>) -> Result<(), JsValue> {
        // Mouse move
        {
            let handler = handler.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let pointer = Vec2::new(event.client_x() as f32, event.client_y() as f32);
                handler.borrow_mut().on_move(pointer);
            });
            self.window
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch start (non-passive so a near touch can be swallowed)
        {
            let handler = handler.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                let touch = event
                    .touches()
                    .get(0)
                    .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32));
                if handler.borrow_mut().on_touch_start(touch) {
                    event.prevent_default();
                }
            });
            let options = web_sys::AddEventListenerOptions::new();
            options.set_passive(false);
            self.window
                .add_event_listener_with_callback_and_add_event_listener_options(
                    "touchstart",
                    closure.as_ref().unchecked_ref(),
                    &options,
                )?;
            closure.forget();
        }

        // Resize
        {
            let handler = handler.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                handler.borrow_mut().on_resize();
            });
            self.window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Accept click
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                handler.borrow_mut().on_accept();
            });
            self.accept
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }
}
