pub mod engine;
pub mod input;

pub mod prelude {
    pub use crate::engine::{Engine, SCREEN_HEIGHT, SCREEN_PIXELS, SCREEN_WIDTH};
    pub use crate::input::{BUTTON_COUNT, ButtonId, ButtonStates};
}
