//! Translates SDL pointer events into view touch events.

use sdl2::event::Event;
use sdl2::mouse::MouseButton;

use tinyjoy_view::geom::Point;
use tinyjoy_view::touch::{MAX_CONTACTS, TouchPhase};

/// SDL reports synthetic mouse events for touch input under this device id;
/// those are skipped so a finger is never double-counted.
const TOUCH_MOUSE_ID: u32 = u32::MAX;

/// Tracks active pointers (fingers, or the left mouse button standing in
/// for a single finger) and produces the complete contact list the view's
/// touch tracker expects on every event.
pub struct PointerTranslator {
    fingers: Vec<(i64, Point)>,
    mouse_held: bool,
    mouse_at: Point,
}

impl PointerTranslator {
    pub fn new() -> Self {
        Self {
            fingers: Vec::with_capacity(MAX_CONTACTS),
            mouse_held: false,
            mouse_at: Point::default(),
        }
    }

    /// Translate one SDL event. Returns the touch phase plus the full
    /// contact list when `event` is a pointer event, `None` otherwise.
    /// Finger coordinates arrive normalized and are mapped to the given
    /// window size.
    pub fn translate(
        &mut self,
        event: &Event,
        window: (u32, u32),
    ) -> Option<(TouchPhase, Vec<Point>)> {
        let (win_w, win_h) = (window.0 as f32, window.1 as f32);
        match *event {
            Event::FingerDown {
                finger_id, x, y, ..
            } => {
                let at = Point::new(x * win_w, y * win_h);
                self.fingers.retain(|&(id, _)| id != finger_id);
                self.fingers.push((finger_id, at));
                Some((TouchPhase::Down, self.contacts()))
            }
            Event::FingerMotion {
                finger_id, x, y, ..
            } => {
                let at = Point::new(x * win_w, y * win_h);
                for finger in &mut self.fingers {
                    if finger.0 == finger_id {
                        finger.1 = at;
                    }
                }
                Some((TouchPhase::Move, self.contacts()))
            }
            Event::FingerUp { finger_id, .. } => {
                self.fingers.retain(|&(id, _)| id != finger_id);
                if self.fingers.is_empty() {
                    Some((TouchPhase::Up, Vec::new()))
                } else {
                    Some((TouchPhase::Move, self.contacts()))
                }
            }
            Event::MouseButtonDown {
                which,
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } if which != TOUCH_MOUSE_ID => {
                self.mouse_held = true;
                self.mouse_at = Point::new(x as f32, y as f32);
                Some((TouchPhase::Down, self.contacts()))
            }
            Event::MouseMotion { which, x, y, .. }
                if which != TOUCH_MOUSE_ID && self.mouse_held =>
            {
                self.mouse_at = Point::new(x as f32, y as f32);
                Some((TouchPhase::Move, self.contacts()))
            }
            Event::MouseButtonUp {
                which,
                mouse_btn: MouseButton::Left,
                ..
            } if which != TOUCH_MOUSE_ID => {
                self.mouse_held = false;
                if self.fingers.is_empty() {
                    Some((TouchPhase::Up, Vec::new()))
                } else {
                    Some((TouchPhase::Move, self.contacts()))
                }
            }
            _ => None,
        }
    }

    fn contacts(&self) -> Vec<Point> {
        let mut contacts: Vec<Point> = self
            .fingers
            .iter()
            .take(MAX_CONTACTS)
            .map(|&(_, at)| at)
            .collect();
        if self.mouse_held && contacts.len() < MAX_CONTACTS {
            contacts.push(self.mouse_at);
        }
        contacts
    }
}
