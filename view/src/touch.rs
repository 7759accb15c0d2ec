//! Multi-touch contact tracking.

use crate::geom::Point;

/// Upper bound on simultaneously tracked contacts.
pub const MAX_CONTACTS: usize = 10;

/// Coarse classification of a platform pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Down,
    Move,
    Up,
    Cancel,
}

/// Records the current set of touch contacts in a preallocated array.
///
/// The list is replaced wholesale on every event, never patched, so a
/// query between events always sees one event's complete contact set.
#[derive(Debug)]
pub struct TouchTracker {
    points: [Point; MAX_CONTACTS],
    count: usize,
}

impl TouchTracker {
    pub fn new() -> Self {
        Self {
            points: [Point::default(); MAX_CONTACTS],
            count: 0,
        }
    }

    /// Feed one pointer event together with the positions of every
    /// currently active contact. Up and cancel clear the list regardless of
    /// `positions`; down and move capture up to [`MAX_CONTACTS`] of them.
    ///
    /// Always returns `true`: the view consumes all touch input inside its
    /// bounds and never propagates it further.
    pub fn handle(&mut self, phase: TouchPhase, positions: &[Point]) -> bool {
        match phase {
            TouchPhase::Up | TouchPhase::Cancel => self.count = 0,
            TouchPhase::Down | TouchPhase::Move => {
                self.count = positions.len().min(MAX_CONTACTS);
                self.points[..self.count].copy_from_slice(&positions[..self.count]);
            }
        }
        true
    }

    /// The currently active contacts.
    pub fn contacts(&self) -> &[Point] {
        &self.points[..self.count]
    }
}

impl Default for TouchTracker {
    fn default() -> Self {
        Self::new()
    }
}
