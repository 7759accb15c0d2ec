//! Virtual-button geometry and touch hit testing.

use tinyjoy_core::input::{BUTTON_COUNT, ButtonId, ButtonStates};

use crate::geom::Point;
use crate::touch::TouchTracker;

// Base geometry in density-independent units: d-pad in the lower-left
// corner, action button in the lower-right.
const BUTTON_RADIUS: f32 = 20.0;
const DPAD_GAP: f32 = 30.0;
const ACTION_GAP_X: f32 = 8.0;
const ACTION_GAP_Y: f32 = 8.0;

/// Touch targets extend past the drawn circle for ergonomics.
const HIT_SLOP: f32 = 1.25;

/// Indicator fill colors (ARGB), pressed and idle.
pub const BUTTON_COLOR_ON: u32 = 0xE0C0_C080;
/// See [`BUTTON_COLOR_ON`].
pub const BUTTON_COLOR_OFF: u32 = 0xA0C0_C0C0;

/// Button positions and indicator radius for one view size.
///
/// Recomputed on every size or density change. Derived from the view size
/// and the physical display density only, never from the skin scale, so
/// control size tracks finger ergonomics rather than artwork magnification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonLayout {
    positions: [Point; BUTTON_COUNT],
    radius: f32,
}

impl ButtonLayout {
    pub fn compute(width: u32, height: u32, density: f32) -> Self {
        let w = width as f32;
        let h = height as f32;
        let button_scale = density * 2.0;

        let gap = DPAD_GAP * button_scale;
        let dpad_x = (BUTTON_RADIUS + DPAD_GAP) * button_scale;
        let dpad_y = h - dpad_x;
        let action_x = w - (BUTTON_RADIUS + ACTION_GAP_X) * button_scale;
        let action_y = h - (BUTTON_RADIUS + ACTION_GAP_Y) * button_scale;

        let mut positions = [Point::default(); BUTTON_COUNT];
        positions[ButtonId::Up.index()] = Point::new(dpad_x, dpad_y - gap);
        positions[ButtonId::Down.index()] = Point::new(dpad_x, dpad_y + gap);
        positions[ButtonId::Left.index()] = Point::new(dpad_x - gap, dpad_y);
        positions[ButtonId::Right.index()] = Point::new(dpad_x + gap, dpad_y);
        positions[ButtonId::Action.index()] = Point::new(action_x, action_y);

        Self {
            positions,
            radius: BUTTON_RADIUS * button_scale,
        }
    }

    pub fn position(&self, button: ButtonId) -> Point {
        self.positions[button.index()]
    }

    /// Radius of the drawn indicator circle.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Activation threshold distance, boundary inclusive.
    pub fn hit_radius(&self) -> f32 {
        self.radius * HIT_SLOP
    }

    /// Derive a fresh activation vector from the current contacts.
    ///
    /// Activations OR together independently: one contact may press several
    /// overlapping buttons (diagonal d-pad), and several contacts may each
    /// press their own. No exclusivity, no debounce, no memory.
    pub fn hit_test(&self, touch: &TouchTracker) -> ButtonStates {
        let mut states: ButtonStates = [false; BUTTON_COUNT];
        let threshold = self.hit_radius();
        for contact in touch.contacts() {
            for button in ButtonId::ALL {
                if contact.distance(self.positions[button.index()]) <= threshold {
                    states[button.index()] = true;
                }
            }
        }
        states
    }
}
