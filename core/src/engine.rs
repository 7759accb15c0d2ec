use crate::input::ButtonId;

/// Native resolution of the emulated OLED display, in pixels.
pub const SCREEN_WIDTH: usize = 128;
/// See [`SCREEN_WIDTH`].
pub const SCREEN_HEIGHT: usize = 64;
/// Length of one complete frame in pixels.
pub const SCREEN_PIXELS: usize = SCREEN_WIDTH * SCREEN_HEIGHT;

/// Interface to the emulation engine driving the presentation layer.
///
/// The engine is an opaque collaborator: it owns the emulated machine's
/// instruction set, timing, and peripherals. The presentation layer only
/// consumes its pixel output and drives it with button events. Implementors
/// run on a dedicated thread, hence the `Send` bound.
pub trait Engine: Send {
    /// Advance emulation by one frame and write it into `pixels` as
    /// ARGB8888, left-to-right, top-to-bottom, [`SCREEN_PIXELS`] long.
    ///
    /// Returns `false` once the core has halted; the caller stops pacing
    /// and the last delivered frame stays on screen.
    fn run_frame(&mut self, pixels: &mut [u32]) -> bool;

    /// Handle a virtual-button transition. Called per-transition, not
    /// per-frame: each call latches the state so the next `run_frame`
    /// observes the accumulated input.
    fn button_event(&mut self, button: ButtonId, pressed: bool);

    /// Audio sample rate in Hz, or 0 when the engine produces no sound.
    fn sample_rate(&self) -> u32 {
        0
    }

    /// Fill `out` with mono i16 samples for the frame just run; returns the
    /// number of samples written. The default produces silence.
    fn fill_sound(&mut self, _out: &mut [i16]) -> usize {
        0
    }

    /// Return the machine to its initial power-on state.
    fn reset(&mut self);
}
