//! The emulator view: layer owner, compositor, and input surface.

use std::sync::Arc;

use tinyjoy_core::engine::{SCREEN_HEIGHT, SCREEN_WIDTH};
use tinyjoy_core::input::{ButtonId, ButtonStates};

use crate::buttons::{BUTTON_COLOR_OFF, BUTTON_COLOR_ON, ButtonLayout};
use crate::geom::Point;
use crate::layer::{Layer, PaintMode};
use crate::pixmap::{Pixmap, argb};
use crate::screen::{FrameSink, ScreenLayer};
use crate::surface::Surface;
use crate::touch::{TouchPhase, TouchTracker};
use crate::transform::{SCREEN_ORIGIN_X, SCREEN_ORIGIN_Y, SKIN_HEIGHT, SKIN_WIDTH, ViewTransform};

/// Owns every layer and all per-frame presentation state.
///
/// Lives on the render context. The only piece shared across threads is
/// the screen layer, handed out as [`FrameSink`] clones; everything else
/// (transforms, button positions, touch contacts) is mutated from the
/// render/input context only and needs no locking.
#[derive(Debug)]
pub struct EmulatorView {
    skin: Layer,
    glass: Option<Layer>,
    screen: Arc<ScreenLayer>,
    buttons: ButtonLayout,
    touch: TouchTracker,
    transform: Option<ViewTransform>,
    size: (u32, u32),
    density: f32,
    released: bool,
}

impl EmulatorView {
    /// Build the view from skin artwork and an optional glass overlay whose
    /// alpha channel is blended additively above the screen.
    pub fn new(skin: Pixmap, glass: Option<Pixmap>, density: f32) -> Self {
        Self {
            skin: Layer::new(skin, PaintMode::Bilinear),
            glass: glass.map(Layer::alpha_mask),
            screen: Arc::new(ScreenLayer::new()),
            buttons: ButtonLayout::compute(0, 0, density),
            touch: TouchTracker::new(),
            transform: None,
            size: (0, 0),
            density,
            released: false,
        }
    }

    /// Host resize notification.
    ///
    /// Zero dimensions defer everything until layout settles. A callback
    /// with the width unchanged is a no-op, matching the platform gate the
    /// layout grew up with; every real recompute updates all layer
    /// placements and button positions together.
    pub fn resized(&mut self, width: u32, height: u32) {
        let Some(vt) = ViewTransform::compute(width, height) else {
            return;
        };
        if self.transform.is_some() && width == self.size.0 {
            return;
        }

        self.size = (width, height);
        self.transform = Some(vt);
        self.skin
            .set_coords(&vt, 0.0, 0.0, SKIN_WIDTH as f32, SKIN_HEIGHT as f32);
        if let Some(glass) = &mut self.glass {
            glass.set_coords(&vt, 0.0, 0.0, SKIN_WIDTH as f32, SKIN_HEIGHT as f32);
        }
        self.screen.set_coords(
            &vt,
            SCREEN_ORIGIN_X as f32,
            SCREEN_ORIGIN_Y as f32,
            SCREEN_WIDTH as f32,
            SCREEN_HEIGHT as f32,
        );
        self.buttons = ButtonLayout::compute(width, height, self.density);
    }

    /// Change the display density and rescale the touch controls. The skin
    /// transform is untouched; control size is independent of skin scale.
    pub fn set_density(&mut self, density: f32) {
        self.density = density;
        if self.transform.is_some() {
            self.buttons = ButtonLayout::compute(self.size.0, self.size.1, density);
        }
    }

    /// Raw pointer event entry point; always consumed.
    pub fn touch_event(&mut self, phase: TouchPhase, positions: &[Point]) -> bool {
        self.touch.handle(phase, positions)
    }

    /// Fresh activation vector derived from the current contacts.
    pub fn button_states(&self) -> ButtonStates {
        self.buttons.hit_test(&self.touch)
    }

    /// A new frame sink handle for the emulation producer.
    pub fn frame_sink(&self) -> FrameSink {
        FrameSink::new(Arc::clone(&self.screen))
    }

    pub fn transform(&self) -> Option<ViewTransform> {
        self.transform
    }

    pub fn button_layout(&self) -> &ButtonLayout {
        &self.buttons
    }

    /// Compose one frame. The order is part of the visual contract: skin
    /// first, then the screen so it occludes the skin cutout, then the
    /// glass sheen, and the button indicators topmost.
    pub fn draw(&self, surface: &mut Surface) {
        if self.released {
            return;
        }
        self.skin.draw(surface);
        self.screen.draw(surface);
        if let Some(glass) = &self.glass {
            glass.draw(surface);
        }

        let states = self.button_states();
        for button in ButtonId::ALL {
            let color = if states[button.index()] {
                BUTTON_COLOR_ON
            } else {
                BUTTON_COLOR_OFF
            };
            let at = self.buttons.position(button);
            surface.fill_circle(at.x, at.y, self.buttons.radius(), color);
        }
    }

    /// Release every layer. Invoked exactly once when the hosting window is
    /// permanently destroyed; draws or frame pushes racing past this point
    /// become silent no-ops.
    pub fn destroy(&mut self) {
        self.released = true;
        self.skin.release();
        if let Some(glass) = &mut self.glass {
            glass.release();
        }
        self.screen.release();
    }
}

/// Synthesized chassis artwork used when no skin PNG is supplied: a dark
/// shell with a bezel around the screen cutout. Keeps the binary and the
/// tests independent of asset files on disk.
pub fn fallback_skin() -> Pixmap {
    const SHELL: u32 = argb(0xFF, 0x3A, 0x3E, 0x46);
    const BEZEL: u32 = argb(0xFF, 0x14, 0x16, 0x1A);
    const WELL: u32 = argb(0xFF, 0x00, 0x00, 0x00);

    let w = SKIN_WIDTH as usize;
    let h = SKIN_HEIGHT as usize;
    let mut skin = Pixmap::new(w, h);
    skin.fill(SHELL);

    // Rounded corners: knock out a 3px step.
    for (cx, cy) in [(0, 0), (w - 3, 0), (0, h - 3), (w - 3, h - 3)] {
        skin.fill_rect(cx, cy, 3, 3, 0);
    }

    let sx = SCREEN_ORIGIN_X as usize;
    let sy = SCREEN_ORIGIN_Y as usize;
    skin.fill_rect(sx - 4, sy - 4, SCREEN_WIDTH + 8, SCREEN_HEIGHT + 8, BEZEL);
    skin.fill_rect(sx, sy, SCREEN_WIDTH, SCREEN_HEIGHT, WELL);
    skin
}
