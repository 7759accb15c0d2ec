use std::thread;

use tinyjoy_core::input::ButtonId;
use tinyjoy_view::geom::Point;
use tinyjoy_view::pixmap::{Pixmap, argb};
use tinyjoy_view::surface::Surface;
use tinyjoy_view::touch::TouchPhase;
use tinyjoy_view::transform::{SKIN_HEIGHT, SKIN_WIDTH};
use tinyjoy_view::view::{EmulatorView, fallback_skin};

mod common;
use common::{frame, test_view};

const SKIN_BLUE: u32 = argb(255, 0, 0, 255);
const FRAME_RED: u32 = argb(255, 255, 0, 0);
const FRAME_GREEN: u32 = argb(255, 0, 255, 0);
const BACKDROP: u32 = argb(255, 32, 32, 32);

// 432x576 portrait maps the skin at 3x with no margin: the screen layer
// covers x 24..408, y 96..288 and the skin x 0..432, y 0..432.
fn sized_view(skin_color: u32) -> (EmulatorView, Surface) {
    let mut view = test_view(skin_color);
    view.resized(432, 576);
    let mut surface = Surface::new(432, 576);
    surface.clear(BACKDROP);
    (view, surface)
}

#[test]
fn draw_order_screen_occludes_skin() {
    let (view, mut surface) = sized_view(SKIN_BLUE);
    view.frame_sink().push(&frame(FRAME_RED));
    view.draw(&mut surface);

    // Inside the screen cutout: the emulated frame wins.
    assert_eq!(surface.get(30, 100), FRAME_RED);
    // On the skin outside the cutout: artwork shows through.
    assert_eq!(surface.get(10, 10), SKIN_BLUE);
    // Below the skin: untouched backdrop.
    assert_eq!(surface.get(216, 560), BACKDROP);
}

#[test]
fn only_the_latest_frame_is_observed() {
    let (view, mut surface) = sized_view(SKIN_BLUE);
    let sink = view.frame_sink();

    // Two pushes back-to-back before any draw: no ghost of the first.
    sink.push(&frame(FRAME_RED));
    sink.push(&frame(FRAME_GREEN));
    view.draw(&mut surface);
    assert_eq!(surface.get(30, 100), FRAME_GREEN);
    assert_eq!(surface.get(400, 280), FRAME_GREEN);
}

#[test]
fn frames_arrive_from_another_thread() {
    let (view, mut surface) = sized_view(SKIN_BLUE);
    let sink = view.frame_sink();

    let producer = thread::spawn(move || {
        for _ in 0..32 {
            sink.push(&frame(FRAME_RED));
        }
        sink.push(&frame(FRAME_GREEN));
    });
    producer.join().unwrap();

    view.draw(&mut surface);
    assert_eq!(surface.get(30, 100), FRAME_GREEN);
}

#[test]
fn teardown_silences_updates_and_draws() {
    let (mut view, mut surface) = sized_view(SKIN_BLUE);
    let sink = view.frame_sink();
    sink.push(&frame(FRAME_RED));

    view.destroy();

    // A producer that has not noticed teardown keeps pushing; nothing
    // faults and nothing is drawn.
    sink.push(&frame(FRAME_GREEN));
    view.draw(&mut surface);
    assert_eq!(surface.get(30, 100), BACKDROP);
    assert_eq!(surface.get(10, 10), BACKDROP);
}

#[test]
fn glass_overlay_adds_above_the_screen() {
    let mut glass = Pixmap::new(SKIN_WIDTH as usize, SKIN_HEIGHT as usize);
    glass.fill(argb(0x20, 0xFF, 0xFF, 0xFF));

    let mut view = EmulatorView::new(common::solid_skin(SKIN_BLUE), Some(glass), 1.0);
    view.resized(432, 576);
    let mut surface = Surface::new(432, 576);
    surface.clear(BACKDROP);

    view.frame_sink().push(&frame(FRAME_RED));
    view.draw(&mut surface);

    // The sheen saturates red and lifts the dark channels.
    assert_eq!(surface.get(30, 100), argb(255, 255, 0x20, 0x20));
}

#[test]
fn touch_events_are_always_consumed() {
    let (mut view, _) = sized_view(SKIN_BLUE);
    let at = [Point::new(100.0, 100.0)];
    assert!(view.touch_event(TouchPhase::Down, &at));
    assert!(view.touch_event(TouchPhase::Move, &at));
    assert!(view.touch_event(TouchPhase::Up, &[]));
    assert!(view.touch_event(TouchPhase::Cancel, &[]));
}

#[test]
fn pressed_buttons_render_differently() {
    let (mut view, mut idle) = sized_view(SKIN_BLUE);
    view.draw(&mut idle);

    let action = view.button_layout().position(ButtonId::Action);
    view.touch_event(TouchPhase::Down, &[action]);
    assert!(view.button_states()[ButtonId::Action.index()]);

    let mut pressed = Surface::new(432, 576);
    pressed.clear(BACKDROP);
    view.draw(&mut pressed);

    let (px, py) = (action.x as usize, action.y as usize);
    assert_ne!(idle.get(px, py), pressed.get(px, py));
}

#[test]
fn fallback_skin_has_a_screen_well() {
    let skin = fallback_skin();
    assert_eq!(skin.width(), SKIN_WIDTH as usize);
    assert_eq!(skin.height(), SKIN_HEIGHT as usize);
    // The cutout is pure black, the shell is not.
    assert_eq!(skin.get(16, 40), argb(255, 0, 0, 0));
    assert_ne!(skin.get(72, 10), argb(255, 0, 0, 0));
}
