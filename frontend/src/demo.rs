//! Built-in demo engine: a block that bounces around the screen, steered
//! with the d-pad, with a square-wave beep while the action button is held.
//! Useful for exercising the whole presentation path without a game core.

use tinyjoy_core::prelude::*;

const BLOCK_SIZE: i32 = 8;
const SAMPLE_RATE: u32 = 44100;
const BEEP_HZ: u32 = 440;
const BEEP_AMPLITUDE: i16 = 6000;

const PIXEL_ON: u32 = 0xFFFF_FFFF;
const PIXEL_OFF: u32 = 0xFF00_0000;

pub struct DemoEngine {
    x: i32,
    y: i32,
    dx: i32,
    dy: i32,
    held: [bool; BUTTON_COUNT],
    beep_phase: u32,
}

impl DemoEngine {
    pub fn new() -> Self {
        Self {
            x: (SCREEN_WIDTH as i32 - BLOCK_SIZE) / 2,
            y: (SCREEN_HEIGHT as i32 - BLOCK_SIZE) / 2,
            dx: 1,
            dy: 1,
            held: [false; BUTTON_COUNT],
            beep_phase: 0,
        }
    }

    fn beeping(&self) -> bool {
        self.held[ButtonId::Action.index()]
    }
}

impl Engine for DemoEngine {
    fn run_frame(&mut self, pixels: &mut [u32]) -> bool {
        // Held directions override the bounce velocity on that axis.
        if self.held[ButtonId::Left.index()] {
            self.dx = -2;
        } else if self.held[ButtonId::Right.index()] {
            self.dx = 2;
        }
        if self.held[ButtonId::Up.index()] {
            self.dy = -2;
        } else if self.held[ButtonId::Down.index()] {
            self.dy = 2;
        }

        self.x += self.dx;
        self.y += self.dy;
        if self.x <= 0 || self.x + BLOCK_SIZE >= SCREEN_WIDTH as i32 {
            self.dx = -self.dx.signum();
            self.x = self.x.clamp(0, SCREEN_WIDTH as i32 - BLOCK_SIZE);
        }
        if self.y <= 0 || self.y + BLOCK_SIZE >= SCREEN_HEIGHT as i32 {
            self.dy = -self.dy.signum();
            self.y = self.y.clamp(0, SCREEN_HEIGHT as i32 - BLOCK_SIZE);
        }

        pixels[..SCREEN_PIXELS].fill(PIXEL_OFF);
        for row in self.y..self.y + BLOCK_SIZE {
            let start = row as usize * SCREEN_WIDTH + self.x as usize;
            pixels[start..start + BLOCK_SIZE as usize].fill(PIXEL_ON);
        }
        true
    }

    fn button_event(&mut self, button: ButtonId, pressed: bool) {
        self.held[button.index()] = pressed;
    }

    fn sample_rate(&self) -> u32 {
        SAMPLE_RATE
    }

    fn fill_sound(&mut self, out: &mut [i16]) -> usize {
        if !self.beeping() {
            self.beep_phase = 0;
            out.fill(0);
            return out.len();
        }
        let half_period = SAMPLE_RATE / (BEEP_HZ * 2);
        for sample in out.iter_mut() {
            *sample = if (self.beep_phase / half_period) % 2 == 0 {
                BEEP_AMPLITUDE
            } else {
                -BEEP_AMPLITUDE
            };
            self.beep_phase = self.beep_phase.wrapping_add(1);
        }
        out.len()
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}
