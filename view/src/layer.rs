//! Compositing layers: an owned pixmap plus placement and paint settings.

use crate::pixmap::Pixmap;
use crate::surface::Surface;
use crate::transform::{Placement, ViewTransform};

/// How a layer's pixels are sampled when scaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintMode {
    /// Crisp block pixels; used for the emulated OLED.
    Nearest,
    /// Smoothed sampling; used for skin artwork.
    Bilinear,
}

/// How a layer's pixels combine with what is already on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositeMode {
    SourceOver,
    /// Saturating per-channel add; used for the glass overlay mask.
    Add,
}

/// Explicit lifecycle tag, checked before any bitmap access. A released
/// layer ignores draws and pixel writes instead of faulting, because a
/// scheduled redraw may race teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerState {
    Active,
    Released,
}

/// One composited element: an owned bitmap, its placement in the view, and
/// its paint and composite settings.
#[derive(Debug)]
pub struct Layer {
    pixmap: Pixmap,
    placement: Placement,
    paint: PaintMode,
    composite: CompositeMode,
    state: LayerState,
}

impl Layer {
    pub fn new(pixmap: Pixmap, paint: PaintMode) -> Self {
        Self {
            pixmap,
            placement: Placement::IDENTITY,
            paint,
            composite: CompositeMode::SourceOver,
            state: LayerState::Active,
        }
    }

    /// Build an additive alpha-mask layer from overlay artwork. Only the
    /// extracted mask stays resident; the full-color source is dropped
    /// immediately so two copies never coexist.
    pub fn alpha_mask(source: Pixmap) -> Self {
        let mask = source.extract_alpha();
        drop(source);
        Self {
            pixmap: mask,
            placement: Placement::IDENTITY,
            paint: PaintMode::Bilinear,
            composite: CompositeMode::Add,
            state: LayerState::Active,
        }
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn state(&self) -> LayerState {
        self.state
    }

    /// Place the layer so its bitmap covers `(x, y, w, h)` in skin units
    /// under the given view transform. The placement is installed as one
    /// assignment, never piecewise.
    pub fn set_coords(&mut self, vt: &ViewTransform, x: f32, y: f32, w: f32, h: f32) {
        if self.state == LayerState::Released {
            return;
        }
        self.placement = vt.place(x, y, w, h, &self.pixmap);
    }

    /// Like [`Self::set_coords`], from a center point and full extents.
    pub fn set_coords_center(&mut self, vt: &ViewTransform, cx: f32, cy: f32, w: f32, h: f32) {
        if self.state == LayerState::Released {
            return;
        }
        self.placement = vt.place_center(cx, cy, w, h, &self.pixmap);
    }

    /// Paint onto `surface`. A released layer draws nothing.
    pub fn draw(&self, surface: &mut Surface) {
        if self.state == LayerState::Released {
            return;
        }
        surface.blit(&self.pixmap, self.placement, self.paint, self.composite);
    }

    /// Overwrite the backing pixels with one produced frame; dropped
    /// silently after release. `pixels` must match the bitmap length.
    pub fn write_pixels(&mut self, pixels: &[u32]) {
        if self.state == LayerState::Released {
            return;
        }
        self.pixmap.pixels_mut().copy_from_slice(pixels);
    }

    /// Read one pixel, or `None` after release.
    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if self.state == LayerState::Released {
            return None;
        }
        Some(self.pixmap.get(x, y))
    }

    /// Mark the bitmap unusable and free its backing memory. Called once at
    /// teardown; every later draw or write is a no-op.
    pub fn release(&mut self) {
        self.state = LayerState::Released;
        self.pixmap = Pixmap::new(0, 0);
    }
}
