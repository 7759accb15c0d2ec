/// Number of virtual buttons on the simulated handheld.
pub const BUTTON_COUNT: usize = 5;

/// The fixed set of virtual buttons: a four-way pad plus one action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonId {
    Up,
    Down,
    Left,
    Right,
    Action,
}

impl ButtonId {
    /// All buttons in index order, for iteration and layout.
    pub const ALL: [Self; BUTTON_COUNT] = [
        Self::Up,
        Self::Down,
        Self::Left,
        Self::Right,
        Self::Action,
    ];

    /// Stable index into [`ButtonStates`] and position arrays.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Human-readable name for diagnostics and configuration.
    pub fn name(self) -> &'static str {
        match self {
            Self::Up => "Up",
            Self::Down => "Down",
            Self::Left => "Left",
            Self::Right => "Right",
            Self::Action => "Action",
        }
    }
}

/// Activation state of every virtual button, indexed by [`ButtonId::index`].
///
/// Purely derived state: recomputed fresh from the current touch contacts on
/// each query and never persisted, so it carries no memory of prior frames.
pub type ButtonStates = [bool; BUTTON_COUNT];
