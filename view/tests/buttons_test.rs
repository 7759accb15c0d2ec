use tinyjoy_core::input::ButtonId;
use tinyjoy_view::buttons::ButtonLayout;
use tinyjoy_view::geom::Point;
use tinyjoy_view::touch::{TouchPhase, TouchTracker};

// Density 1.0 on a 480x800 portrait view: button scale 2, radius 40,
// hit threshold 50, d-pad gap 60.
fn layout() -> ButtonLayout {
    ButtonLayout::compute(480, 800, 1.0)
}

fn states_for(layout: &ButtonLayout, contacts: &[Point]) -> [bool; 5] {
    let mut touch = TouchTracker::new();
    touch.handle(TouchPhase::Down, contacts);
    layout.hit_test(&touch)
}

#[test]
fn contact_on_a_button_activates_only_that_button() {
    let layout = layout();
    for button in ButtonId::ALL {
        let states = states_for(&layout, &[layout.position(button)]);
        for other in ButtonId::ALL {
            assert_eq!(
                states[other.index()],
                other == button,
                "{} vs {}",
                button.name(),
                other.name()
            );
        }
    }
}

#[test]
fn hit_boundary_is_inclusive() {
    let layout = layout();
    let up = layout.position(ButtonId::Up);
    let threshold = layout.hit_radius();
    assert_eq!(threshold, 50.0);

    let on_edge = Point::new(up.x + threshold, up.y);
    assert!(states_for(&layout, &[on_edge])[ButtonId::Up.index()]);

    let past_edge = Point::new(up.x + threshold + 0.5, up.y);
    assert!(!states_for(&layout, &[past_edge])[ButtonId::Up.index()]);
}

#[test]
fn diagonal_contact_activates_two_dpad_buttons() {
    let layout = layout();
    let up = layout.position(ButtonId::Up);
    let right = layout.position(ButtonId::Right);
    let diagonal = Point::new((up.x + right.x) / 2.0, (up.y + right.y) / 2.0);

    let states = states_for(&layout, &[diagonal]);
    assert!(states[ButtonId::Up.index()]);
    assert!(states[ButtonId::Right.index()]);
    assert!(!states[ButtonId::Down.index()]);
    assert!(!states[ButtonId::Left.index()]);
    assert!(!states[ButtonId::Action.index()]);
}

#[test]
fn simultaneous_contacts_activate_distinct_buttons() {
    let layout = layout();
    let states = states_for(
        &layout,
        &[
            layout.position(ButtonId::Left),
            layout.position(ButtonId::Action),
        ],
    );
    assert!(states[ButtonId::Left.index()]);
    assert!(states[ButtonId::Action.index()]);
    assert!(!states[ButtonId::Up.index()]);
}

#[test]
fn no_contacts_means_all_inactive() {
    let layout = layout();
    let touch = TouchTracker::new();
    assert_eq!(layout.hit_test(&touch), [false; 5]);

    // And lifting clears any prior activation.
    let mut touch = TouchTracker::new();
    touch.handle(TouchPhase::Down, &[layout.position(ButtonId::Action)]);
    touch.handle(TouchPhase::Up, &[]);
    assert_eq!(layout.hit_test(&touch), [false; 5]);
}

#[test]
fn layout_scales_with_density_not_view_contents() {
    let base = ButtonLayout::compute(480, 800, 1.0);
    let dense = ButtonLayout::compute(480, 800, 1.5);
    assert!(dense.radius() > base.radius());
    assert_ne!(
        base.position(ButtonId::Up),
        dense.position(ButtonId::Up),
        "positions must track density"
    );

    // Same view size and density always produce the same layout.
    assert_eq!(base, ButtonLayout::compute(480, 800, 1.0));
}
