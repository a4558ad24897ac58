//! Runaway Button entry point
//!
//! On the web this wires the widget to the page. Natively it replays a short
//! scripted session against an in-memory layout and logs what happened.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;

    use runaway_button::Widget;
    use runaway_button::evade::seeded;
    use runaway_button::platform::EventSource;
    use runaway_button::platform::web::{DomEvents, DomLayout};

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Runaway Button starting...");

        let layout = DomLayout::from_document()?;
        let settings = layout.settings();
        let events = DomEvents::new(&layout);

        let seed = js_sys::Date::now() as u64;
        let widget = Rc::new(RefCell::new(Widget::new(layout, seeded(seed), settings)));
        events.attach(widget)?;

        log::info!("Runaway Button ready (seed {})", seed);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_app::run() {
        log::error!("Runaway Button failed to start: {:?}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use runaway_button::evade::seeded;
    use runaway_button::platform::{EventSource, HeadlessLayout, InputEvent, ScriptedEvents};
    use runaway_button::{Settings, Widget};

    env_logger::init();
    log::info!("Runaway Button (native) starting...");
    log::info!("Native mode is a headless replay - build for wasm32 for the real thing");

    let settings = match std::env::args().nth(1) {
        Some(json) => Settings::from_json_or_default(&json),
        None => Settings::default(),
    };
    let widget = Rc::new(RefCell::new(Widget::new(
        HeadlessLayout::demo_page(),
        seeded(2024),
        settings,
    )));

    // Chase the button a few times, letting the cooldown expire in between
    for _ in 0..6 {
        let target = widget.borrow().element_center() + Vec2::new(-20.0, 10.0);
        let script = ScriptedEvents::new(vec![InputEvent::Move(target)]);
        let _ = script.attach(widget.clone());
        widget.borrow_mut().layout.advance(300.0);
    }

    widget.borrow_mut().layout.resize(Vec2::new(640.0, 480.0));
    let _ = ScriptedEvents::new(vec![InputEvent::Resize, InputEvent::Accept]).attach(widget.clone());

    let w = widget.borrow();
    println!(
        "{} dodges, final center {:?}, {} particles spawned",
        w.state().moves,
        w.element_center(),
        w.layout.particles_spawned
    );
    if let Ok(json) = serde_json::to_string_pretty(w.state()) {
        println!("{json}");
    }
}
