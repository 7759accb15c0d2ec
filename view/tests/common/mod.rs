use tinyjoy_core::engine::SCREEN_PIXELS;
use tinyjoy_view::pixmap::Pixmap;
use tinyjoy_view::transform::{SKIN_HEIGHT, SKIN_WIDTH};
use tinyjoy_view::view::EmulatorView;

/// A skin-sized pixmap filled with one opaque color.
pub fn solid_skin(color: u32) -> Pixmap {
    let mut pm = Pixmap::new(SKIN_WIDTH as usize, SKIN_HEIGHT as usize);
    pm.fill(color);
    pm
}

/// One full emulated-screen frame filled with `color`.
pub fn frame(color: u32) -> Vec<u32> {
    vec![color; SCREEN_PIXELS]
}

/// A view over a solid skin at density 1.0.
pub fn test_view(skin_color: u32) -> EmulatorView {
    EmulatorView::new(solid_skin(skin_color), None, 1.0)
}
