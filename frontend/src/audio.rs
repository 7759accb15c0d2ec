//! SDL audio output for the engine's beeper samples.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use sdl2::audio::{AudioCallback, AudioDevice, AudioSpecDesired};

/// Samples over which output ramps in at startup and out at shutdown,
/// avoiding pops (~6 ms at 44.1 kHz).
const RAMP_SAMPLES: u32 = 256;

/// Shared sample queue: the emulation thread pushes one frame's worth per
/// tick, the SDL callback thread drains it.
pub type SampleQueue = Arc<Mutex<VecDeque<i16>>>;

struct Speaker {
    queue: SampleQueue,
    stopping: Arc<AtomicBool>,
    ramped_in: u32,
    ramped_out: u32,
}

impl Speaker {
    /// Gain for the next sample, advancing the ramp positions.
    fn step_gain(&mut self) -> f32 {
        if self.ramped_in < RAMP_SAMPLES {
            self.ramped_in += 1;
            return self.ramped_in as f32 / RAMP_SAMPLES as f32;
        }
        if self.stopping.load(Ordering::Relaxed) {
            if self.ramped_out >= RAMP_SAMPLES {
                return 0.0;
            }
            self.ramped_out += 1;
            return 1.0 - self.ramped_out as f32 / RAMP_SAMPLES as f32;
        }
        1.0
    }
}

impl AudioCallback for Speaker {
    type Channel = i16;

    fn callback(&mut self, out: &mut [i16]) {
        let queue = Arc::clone(&self.queue);
        let mut queue = queue.lock().unwrap();
        for sample in out.iter_mut() {
            let raw = queue.pop_front().unwrap_or(0);
            let gain = self.step_gain();
            *sample = (raw as f32 * gain) as i16;
        }
    }
}

pub struct Audio {
    device: AudioDevice<Speaker>,
    queue: SampleQueue,
    stopping: Arc<AtomicBool>,
}

impl Audio {
    /// Open mono i16 playback at `sample_rate`, or `None` when the engine
    /// produces no sound. The device starts paused; call [`Self::resume`]
    /// once the first frame of samples is queued.
    pub fn open(subsystem: &sdl2::AudioSubsystem, sample_rate: u32) -> Option<Self> {
        if sample_rate == 0 {
            return None;
        }

        let queue: SampleQueue = Arc::new(Mutex::new(VecDeque::with_capacity(4096)));
        let stopping = Arc::new(AtomicBool::new(false));

        let desired = AudioSpecDesired {
            freq: Some(sample_rate as i32),
            channels: Some(1),
            samples: Some(512),
        };

        let device = subsystem
            .open_playback(None, &desired, |_spec| Speaker {
                queue: Arc::clone(&queue),
                stopping: Arc::clone(&stopping),
                ramped_in: 0,
                ramped_out: 0,
            })
            .expect("Failed to open SDL audio device");

        Some(Self {
            device,
            queue,
            stopping,
        })
    }

    pub fn queue(&self) -> SampleQueue {
        Arc::clone(&self.queue)
    }

    pub fn resume(&self) {
        self.device.resume();
    }

    /// Ramp to silence, then pause and drop the device.
    pub fn shutdown(self) {
        self.stopping.store(true, Ordering::Relaxed);
        // Give the callback one ramp's worth of real time.
        std::thread::sleep(Duration::from_millis(10));
        self.device.pause();
    }
}
