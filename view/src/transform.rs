//! Coordinate mapping between logical skin space and physical view pixels.

use crate::pixmap::Pixmap;

/// Logical size of the skin artwork, in skin-space units.
pub const SKIN_WIDTH: u32 = 144;
/// See [`SKIN_WIDTH`].
pub const SKIN_HEIGHT: u32 = 144;

/// Top-left corner of the emulated screen within the skin, in skin units.
pub const SCREEN_ORIGIN_X: u32 = 8;
/// See [`SCREEN_ORIGIN_X`].
pub const SCREEN_ORIGIN_Y: u32 = 32;

/// Shared scale and offset placing skin space inside the current view.
///
/// Recomputed on every size change; every layer placement and nothing else
/// derives from this plus static logical coordinates. The scale is a whole
/// number so pixel art lands on pixel boundaries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub scale: f32,
    pub base_x: f32,
    pub base_y: f32,
}

impl ViewTransform {
    /// Compute placement for a view of `width` x `height` physical pixels.
    ///
    /// Portrait orientation reserves an extra third of the skin height so
    /// the touch controls clear the artwork. The scale uses the smaller of
    /// the two axis ratios (never cropping) and never drops below 1x; the
    /// skin is centered in whatever is left over.
    ///
    /// Returns `None` while either dimension is zero, i.e. layout has not
    /// settled yet.
    pub fn compute(width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        let landscape = width > height;
        let effective_h = if landscape {
            SKIN_HEIGHT
        } else {
            SKIN_HEIGHT * 4 / 3
        };
        let scale = (width / SKIN_WIDTH).min(height / effective_h).max(1) as f32;
        Some(Self {
            scale,
            base_x: (width as f32 - SKIN_WIDTH as f32 * scale) / 2.0,
            base_y: (height as f32 - effective_h as f32 * scale) / 2.0,
        })
    }

    /// Placement for a bitmap covering `(x, y, w, h)` in skin units.
    ///
    /// Scale and translate come back as one value; callers install it with
    /// a single assignment so a renderer never observes a half-updated
    /// transform.
    pub fn place(&self, x: f32, y: f32, w: f32, h: f32, pixmap: &Pixmap) -> Placement {
        Placement {
            sx: self.scale * w / pixmap.width() as f32,
            sy: self.scale * h / pixmap.height() as f32,
            tx: self.base_x + x * self.scale,
            ty: self.base_y + y * self.scale,
        }
    }

    /// Like [`Self::place`], but given a center point and full extents.
    pub fn place_center(&self, cx: f32, cy: f32, w: f32, h: f32, pixmap: &Pixmap) -> Placement {
        self.place(cx - w / 2.0, cy - h / 2.0, w, h, pixmap)
    }
}

/// A 2x3 affine transform restricted to per-axis scale plus translate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub sx: f32,
    pub sy: f32,
    pub tx: f32,
    pub ty: f32,
}

impl Placement {
    pub const IDENTITY: Self = Self {
        sx: 1.0,
        sy: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    /// Map a source-pixel coordinate into view space.
    pub fn map(&self, x: f32, y: f32) -> (f32, f32) {
        (x * self.sx + self.tx, y * self.sy + self.ty)
    }

    /// Map a view coordinate back into source pixels.
    pub fn unmap(&self, x: f32, y: f32) -> (f32, f32) {
        ((x - self.tx) / self.sx, (y - self.ty) / self.sy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_size_defers() {
        assert!(ViewTransform::compute(0, 480).is_none());
        assert!(ViewTransform::compute(480, 0).is_none());
    }

    #[test]
    fn scale_clamps_to_one_on_tiny_views() {
        let vt = ViewTransform::compute(100, 90).unwrap();
        assert_eq!(vt.scale, 1.0);
    }

    #[test]
    fn placement_round_trips() {
        let p = Placement {
            sx: 3.0,
            sy: 2.0,
            tx: 10.0,
            ty: -4.0,
        };
        let (x, y) = p.map(5.0, 7.0);
        let (u, v) = p.unmap(x, y);
        assert!((u - 5.0).abs() < 1e-5);
        assert!((v - 7.0).abs() < 1e-5);
    }
}
