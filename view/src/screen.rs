//! The emulated screen layer and its thread-safe frame sink.

use std::sync::{Arc, Mutex, MutexGuard};

use tinyjoy_core::engine::{SCREEN_HEIGHT, SCREEN_PIXELS, SCREEN_WIDTH};

use crate::layer::{Layer, PaintMode};
use crate::pixmap::Pixmap;
use crate::surface::Surface;
use crate::transform::ViewTransform;

/// The screen layer is the one resource shared between the emulation
/// producer and the render context, so it carries its own lock. Frame
/// updates and draws both take it for the duration of one pixel copy or
/// blit and therefore never interleave partially; both re-check the
/// released tag under the same lock before touching the bitmap.
#[derive(Debug)]
pub struct ScreenLayer {
    inner: Mutex<Layer>,
}

impl ScreenLayer {
    pub fn new() -> Self {
        // Nearest-neighbour so the OLED pixels stay crisp when scaled up.
        let pixmap = Pixmap::new(SCREEN_WIDTH, SCREEN_HEIGHT);
        Self {
            inner: Mutex::new(Layer::new(pixmap, PaintMode::Nearest)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Layer> {
        // A panic while holding the lock leaves at worst a torn frame,
        // which the next update overwrites.
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Reposition the screen within the skin under a new view transform.
    pub fn set_coords(&self, vt: &ViewTransform, x: f32, y: f32, w: f32, h: f32) {
        self.lock().set_coords(vt, x, y, w, h);
    }

    /// Composite the current frame onto `surface`.
    pub fn draw(&self, surface: &mut Surface) {
        self.lock().draw(surface);
    }

    /// Copy one produced frame into the bitmap; a no-op after release.
    pub fn write(&self, pixels: &[u32]) {
        self.lock().write_pixels(pixels);
    }

    /// Read back one pixel of the current frame, `None` after release.
    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        self.lock().pixel(x, y)
    }

    /// Release the bitmap; later writes and draws become no-ops.
    pub fn release(&self) {
        self.lock().release();
    }
}

impl Default for ScreenLayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle the emulation producer uses to publish frames.
///
/// Cloneable and cheap; all clones feed the same screen layer. There is no
/// frame queue: each push overwrites the bitmap, so if the producer
/// outpaces the renderer only the latest frame is ever observed.
#[derive(Debug, Clone)]
pub struct FrameSink {
    screen: Arc<ScreenLayer>,
}

impl FrameSink {
    pub(crate) fn new(screen: Arc<ScreenLayer>) -> Self {
        Self { screen }
    }

    /// Publish one frame of at least [`SCREEN_PIXELS`] ARGB8888 words.
    /// Short buffers are dropped, as is anything arriving after teardown.
    pub fn push(&self, pixels: &[u32]) {
        if pixels.len() < SCREEN_PIXELS {
            return;
        }
        self.screen.write(&pixels[..SCREEN_PIXELS]);
    }
}
