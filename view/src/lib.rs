//! Real-time presentation layer for the Tiny Joypad handheld emulator.
//!
//! This crate composites the emulated 128x64 OLED over skin artwork and
//! translates multi-touch input into virtual-button states. Data flows in
//! three directions: the emulation thread pushes frames through a
//! [`screen::FrameSink`] into the screen layer's pixmap (guarded by the
//! layer's own lock); the render context draws all layers in a fixed order
//! via [`view::EmulatorView::draw`]; raw pointer events land in the
//! [`touch::TouchTracker`], from which the button hit tester derives a fresh
//! activation vector on every query.
//!
//! Everything here is software rendering into a [`surface::Surface`]; the
//! hosting frontend decides how that buffer reaches the display.

pub mod buttons;
pub mod geom;
pub mod layer;
pub mod pixmap;
pub mod screen;
pub mod surface;
pub mod touch;
pub mod transform;
pub mod view;

pub mod prelude {
    pub use crate::buttons::ButtonLayout;
    pub use crate::geom::Point;
    pub use crate::pixmap::Pixmap;
    pub use crate::screen::FrameSink;
    pub use crate::surface::Surface;
    pub use crate::touch::{MAX_CONTACTS, TouchPhase};
    pub use crate::view::EmulatorView;
}
