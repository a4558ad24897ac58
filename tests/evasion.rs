use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use proptest::prelude::*;
use rand_pcg::Pcg32;

use runaway_button::evade::{PlanRequest, Planner, Rect, RoamBounds, Tier, seeded};
use runaway_button::platform::{
    EventSource, HeadlessLayout, InputEvent, ScriptedEvents, WidgetEvents,
};
use runaway_button::{Settings, Widget};

fn demo_widget(seed: u64) -> Widget<HeadlessLayout, Pcg32> {
    Widget::new(HeadlessLayout::demo_page(), seeded(seed), Settings::default())
}

#[test]
fn test_pointer_on_exact_center_triggers_and_clears() {
    let mut w = demo_widget(1);
    let pointer = w.element_center();
    assert!(w.is_near(pointer));

    let placement = w.evade(pointer).unwrap();
    assert_eq!(placement.tier, Tier::Bounce);
    assert!(placement.center.distance(pointer) >= 86.0);
}

#[test]
fn test_obstacle_matching_roam_bounds_still_places_in_bounds() {
    let settings = Settings::default();
    let planner = Planner::from_settings(&settings);
    let size = Vec2::new(96.0, 44.0);
    let origin = Vec2::new(640.0, 400.0);
    let bounds = RoamBounds::compute(Vec2::new(1280.0, 800.0), size, 16.0, origin, 240.0);

    let req = PlanRequest {
        pointer: origin + Vec2::new(-10.0, -10.0),
        current_center: origin,
        origin,
        obstacle: bounds.as_rect(),
        bounds,
        size,
    };
    let p = planner.plan(&req, &mut seeded(99));
    assert_eq!(p.tier, Tier::Retreat);
    assert!(bounds.contains(p.center));
}

#[test]
fn test_two_moves_within_cooldown() {
    let mut w = demo_widget(2);
    let pointer = w.element_center();
    w.on_move(pointer);
    let after_first = w.element_center();
    let writes = w.layout.writes.len();

    w.layout.advance(279.0);
    w.on_move(after_first);
    assert_eq!(w.element_center(), after_first);
    assert_eq!(w.layout.writes.len(), writes);
}

#[test]
fn test_accept_spawns_and_expires_confetti() {
    let widget = Rc::new(RefCell::new(demo_widget(3)));
    ScriptedEvents::new(vec![InputEvent::Accept])
        .attach(widget.clone())
        .unwrap();

    let mut w = widget.borrow_mut();
    assert!(!w.layout.buttons_enabled);
    assert!(!w.layout.buttons_visible);
    assert_eq!(w.layout.particles_spawned, 34);
    assert_eq!(w.layout.particles.len(), 34);

    let mut lifetimes: Vec<f64> = w
        .layout
        .particles
        .iter()
        .map(|p| p.particle.lifetime_ms())
        .collect();
    lifetimes.sort_by(|a, b| a.total_cmp(b));

    // Everything lives at least min duration + buffer, at most the full range
    assert!(lifetimes[0] >= 2900.0 - 1e-3);
    assert!(lifetimes[33] <= 6300.0 + 1e-3);

    // Step just past the shortest lifetime: exactly the due ones are gone
    w.layout.advance(lifetimes[0] + 0.001);
    let due = lifetimes.iter().filter(|&&l| l <= lifetimes[0] + 0.001).count();
    assert_eq!(w.layout.particles.len(), 34 - due);

    w.layout.advance(10_000.0);
    assert!(w.layout.particles.is_empty());
    assert_eq!(w.layout.particles_spawned, 34);
}

#[test]
fn test_touch_without_point_is_ignored() {
    let mut w = demo_widget(4);
    assert!(!w.on_touch_start(None));
    assert!(w.layout.writes.is_empty());
}

#[test]
fn test_resize_twice_is_stable() {
    let mut w = demo_widget(5);
    let p = w.element_center();
    w.on_move(p);
    w.layout.resize(Vec2::new(700.0, 500.0));
    w.on_resize();
    let once = w.element_center();
    w.on_resize();
    assert_eq!(w.element_center(), once);
}

#[test]
fn test_tiny_viewport_does_not_panic() {
    let mut w = demo_widget(6);
    w.layout.resize(Vec2::new(50.0, 20.0));
    let p = w.element_center();
    w.on_move(p);
    w.on_resize();
    assert_eq!(w.state().moves, 1);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_chase_stays_within_roam_radius(
        seed in any::<u64>(),
        offsets in prop::collection::vec((-60.0f32..60.0, -60.0f32..60.0), 1..40),
    ) {
        let mut w = demo_widget(seed);
        let origin = w.element_center();
        let obstacle = w.layout.obstacle;
        let size = w.layout.element.size();

        for (dx, dy) in offsets {
            let pointer = w.element_center() + Vec2::new(dx, dy);
            if let Some(p) = w.evade(pointer) {
                let evader = w.state().evader.unwrap();
                let bounds = evader.bounds(w.layout.viewport, w.settings());
                prop_assert!(bounds.contains(p.center));
                if p.tier != Tier::Retreat {
                    prop_assert!(!Rect::from_center_size(p.center, size).overlaps(&obstacle));
                }
            }
            let d = (w.element_center() - origin).abs();
            prop_assert!(d.x <= 240.0 + 1e-3 && d.y <= 240.0 + 1e-3);
            w.layout.advance(300.0);
        }
    }

    #[test]
    fn prop_far_pointer_never_moves(
        seed in any::<u64>(),
        angle in 0.0f32..std::f32::consts::TAU,
        extra in 1.0f32..400.0,
    ) {
        let mut w = demo_widget(seed);
        let center = w.element_center();
        w.on_move(center + Vec2::from_angle(angle) * (105.0 + extra));
        prop_assert!(w.layout.writes.is_empty());
        prop_assert_eq!(w.state().moves, 0);
    }
}
