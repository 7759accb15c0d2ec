//! Software render target the compositor draws into.

use crate::layer::{CompositeMode, PaintMode};
use crate::pixmap::Pixmap;
use crate::transform::Placement;

/// An ARGB8888 frame the compositor assembles each redraw. The alpha
/// channel of stored pixels is always 0xFF; blending happens on the way in.
#[derive(Debug)]
pub struct Surface {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl Surface {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0xFF00_0000; width * height],
        }
    }

    /// Reallocate for a new view size; contents become undefined until the
    /// next clear.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels.resize(width * height, 0xFF00_0000);
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Pixel at `(x, y)`; callers keep coordinates in bounds.
    pub fn get(&self, x: usize, y: usize) -> u32 {
        self.pixels[y * self.width + x]
    }

    /// Fill the whole surface with one opaque color.
    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color | 0xFF00_0000);
    }

    /// Repack as tightly-laid RGB24 for texture upload.
    pub fn to_rgb24(&self, out: &mut Vec<u8>) {
        out.clear();
        out.reserve(self.pixels.len() * 3);
        for &px in &self.pixels {
            out.push((px >> 16) as u8);
            out.push((px >> 8) as u8);
            out.push(px as u8);
        }
    }

    /// Draw `src` under the given placement by inverse-mapping every
    /// covered destination pixel back into source space.
    pub fn blit(
        &mut self,
        src: &Pixmap,
        placement: Placement,
        paint: PaintMode,
        composite: CompositeMode,
    ) {
        if src.width() == 0 || src.height() == 0 {
            return;
        }
        let (x0, y0) = placement.map(0.0, 0.0);
        let (x1, y1) = placement.map(src.width() as f32, src.height() as f32);
        let left = (x0.min(x1).floor().max(0.0)) as usize;
        let top = (y0.min(y1).floor().max(0.0)) as usize;
        let right = (x0.max(x1).ceil() as isize).clamp(0, self.width as isize) as usize;
        let bottom = (y0.max(y1).ceil() as isize).clamp(0, self.height as isize) as usize;

        for py in top..bottom {
            for px in left..right {
                let (u, v) = placement.unmap(px as f32 + 0.5, py as f32 + 0.5);
                let sample = match paint {
                    PaintMode::Nearest => sample_nearest(src, u, v),
                    PaintMode::Bilinear => sample_bilinear(src, u, v),
                };
                let Some(color) = sample else { continue };
                let idx = py * self.width + px;
                self.pixels[idx] = match composite {
                    CompositeMode::SourceOver => blend_over(self.pixels[idx], color),
                    CompositeMode::Add => blend_add(self.pixels[idx], color),
                };
            }
        }
    }

    /// Fill a circle, source-over blended, clipped to the surface.
    pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: u32) {
        if radius <= 0.0 {
            return;
        }
        let left = ((cx - radius).floor().max(0.0)) as usize;
        let top = ((cy - radius).floor().max(0.0)) as usize;
        let right = (((cx + radius).ceil()) as isize).clamp(0, self.width as isize) as usize;
        let bottom = (((cy + radius).ceil()) as isize).clamp(0, self.height as isize) as usize;
        let r2 = radius * radius;

        for py in top..bottom {
            for px in left..right {
                let dx = px as f32 + 0.5 - cx;
                let dy = py as f32 + 0.5 - cy;
                if dx * dx + dy * dy <= r2 {
                    let idx = py * self.width + px;
                    self.pixels[idx] = blend_over(self.pixels[idx], color);
                }
            }
        }
    }
}

fn sample_nearest(src: &Pixmap, u: f32, v: f32) -> Option<u32> {
    if u < 0.0 || v < 0.0 {
        return None;
    }
    let x = u as usize;
    let y = v as usize;
    if x >= src.width() || y >= src.height() {
        return None;
    }
    Some(src.get(x, y))
}

fn sample_bilinear(src: &Pixmap, u: f32, v: f32) -> Option<u32> {
    // Texel centers sit at integer + 0.5.
    let fu = u - 0.5;
    let fv = v - 0.5;
    if fu <= -1.0 || fv <= -1.0 || fu >= src.width() as f32 || fv >= src.height() as f32 {
        return None;
    }
    let x0 = fu.floor() as isize;
    let y0 = fv.floor() as isize;
    let tx = fu - x0 as f32;
    let ty = fv - y0 as f32;

    let fetch = |x: isize, y: isize| -> u32 {
        let x = x.clamp(0, src.width() as isize - 1) as usize;
        let y = y.clamp(0, src.height() as isize - 1) as usize;
        src.get(x, y)
    };
    let c00 = fetch(x0, y0);
    let c10 = fetch(x0 + 1, y0);
    let c01 = fetch(x0, y0 + 1);
    let c11 = fetch(x0 + 1, y0 + 1);

    let mut out = 0u32;
    for shift in [24, 16, 8, 0] {
        let lerp2 = |a: u32, b: u32, t: f32| -> f32 {
            let a = ((a >> shift) & 0xFF) as f32;
            let b = ((b >> shift) & 0xFF) as f32;
            a + (b - a) * t
        };
        let top = lerp2(c00, c10, tx);
        let bottom = lerp2(c01, c11, tx);
        let value = (top + (bottom - top) * ty).round().clamp(0.0, 255.0) as u32;
        out |= value << shift;
    }
    Some(out)
}

/// Standard source-over: `src` alpha weights it against `dst`. The result
/// is opaque because the surface is the final output.
fn blend_over(dst: u32, src: u32) -> u32 {
    let sa = (src >> 24) & 0xFF;
    match sa {
        0 => dst,
        255 => src | 0xFF00_0000,
        _ => {
            let inv = 255 - sa;
            let mut out = 0xFF00_0000;
            for shift in [16, 8, 0] {
                let s = (src >> shift) & 0xFF;
                let d = (dst >> shift) & 0xFF;
                out |= ((s * sa + d * inv + 127) / 255) << shift;
            }
            out
        }
    }
}

/// Additive composition: saturating per-channel add of the source color,
/// used for the glass overlay's alpha mask.
fn blend_add(dst: u32, src: u32) -> u32 {
    let mut out = 0xFF00_0000;
    for shift in [16, 8, 0] {
        let s = (src >> shift) & 0xFF;
        let d = (dst >> shift) & 0xFF;
        out |= ((s + d).min(255)) << shift;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixmap::argb;

    #[test]
    fn clear_forces_opaque() {
        let mut s = Surface::new(2, 2);
        s.clear(0x0012_3456);
        assert_eq!(s.get(0, 0), 0xFF12_3456);
    }

    #[test]
    fn blend_over_endpoints() {
        assert_eq!(blend_over(0xFF000000, argb(0, 9, 9, 9)), 0xFF000000);
        assert_eq!(
            blend_over(0xFF000000, argb(255, 1, 2, 3)),
            argb(255, 1, 2, 3)
        );
    }

    #[test]
    fn blend_add_saturates() {
        let out = blend_add(argb(255, 200, 200, 200), argb(255, 100, 10, 0));
        assert_eq!(out, argb(255, 255, 210, 200));
    }

    #[test]
    fn nearest_blit_scales_without_smearing() {
        let mut src = Pixmap::new(2, 1);
        src.put(0, 0, argb(255, 10, 0, 0));
        src.put(1, 0, argb(255, 0, 20, 0));

        let mut s = Surface::new(4, 2);
        s.clear(0x000000);
        let placement = Placement {
            sx: 2.0,
            sy: 2.0,
            tx: 0.0,
            ty: 0.0,
        };
        s.blit(&src, placement, PaintMode::Nearest, CompositeMode::SourceOver);
        assert_eq!(s.get(0, 0), argb(255, 10, 0, 0));
        assert_eq!(s.get(1, 1), argb(255, 10, 0, 0));
        assert_eq!(s.get(2, 0), argb(255, 0, 20, 0));
        assert_eq!(s.get(3, 1), argb(255, 0, 20, 0));
    }

    #[test]
    fn blit_clips_to_surface_bounds() {
        let mut src = Pixmap::new(4, 4);
        src.fill(argb(255, 50, 50, 50));
        let mut s = Surface::new(2, 2);
        s.clear(0x000000);
        let placement = Placement {
            sx: 1.0,
            sy: 1.0,
            tx: -2.0,
            ty: -2.0,
        };
        s.blit(&src, placement, PaintMode::Nearest, CompositeMode::SourceOver);
        assert_eq!(s.get(1, 1), argb(255, 50, 50, 50));
    }

    #[test]
    fn circle_covers_center_and_respects_radius() {
        let mut s = Surface::new(9, 9);
        s.clear(0x000000);
        s.fill_circle(4.5, 4.5, 2.0, argb(255, 77, 0, 0));
        assert_eq!(s.get(4, 4), argb(255, 77, 0, 0));
        assert_eq!(s.get(0, 0), 0xFF00_0000);
    }

    #[test]
    fn rgb24_packing_order() {
        let mut s = Surface::new(1, 1);
        s.clear(argb(0, 1, 2, 3));
        let mut out = Vec::new();
        s.to_rgb24(&mut out);
        assert_eq!(out, vec![1, 2, 3]);
    }
}
