use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Scancode;

use tinyjoy_core::input::{BUTTON_COUNT, ButtonId, ButtonStates};
use tinyjoy_core::prelude::Engine;
use tinyjoy_view::pixmap::argb;
use tinyjoy_view::screen::FrameSink;
use tinyjoy_view::surface::Surface;
use tinyjoy_view::transform::{SKIN_HEIGHT, SKIN_WIDTH};
use tinyjoy_view::view::EmulatorView;

use crate::audio::{Audio, SampleQueue};
use crate::config::Config;
use crate::input::PointerTranslator;
use crate::video::Video;

const BACKDROP: u32 = argb(255, 32, 32, 32);

/// The queue never holds more than a quarter second of audio; if the
/// callback falls behind, old samples are dropped instead of piling up
/// as latency.
const MAX_QUEUED_AUDIO_SECS: u32 = 4;

pub fn run(mut view: EmulatorView, engine: Box<dyn Engine>, config: &Config) {
    let sdl_context = sdl2::init().expect("Failed to initialize SDL2");
    let sdl_video = sdl_context.video().expect("Failed to init SDL video");
    let sdl_audio = sdl_context.audio().expect("Failed to init SDL audio");

    let density = config
        .density
        .or_else(|| sdl_video.display_dpi(0).ok().map(|(ddpi, _, _)| ddpi / 160.0))
        .unwrap_or(1.0);
    view.set_density(density);

    // Portrait window: skin on top, touch controls in the margin below.
    let width = SKIN_WIDTH * config.window_scale;
    let height = SKIN_HEIGHT * config.window_scale * 4 / 3;
    let mut video = Video::new(&sdl_video, "tinyjoy", width, height);
    let mut event_pump = sdl_context.event_pump().expect("Failed to get event pump");

    view.resized(width, height);
    let mut surface = Surface::new(width as usize, height as usize);

    let audio = Audio::open(&sdl_audio, engine.sample_rate());
    let sample_queue = audio.as_ref().map(Audio::queue);
    if let Some(audio) = &audio {
        audio.resume();
    }

    let running = Arc::new(AtomicBool::new(true));
    let reset_requested = Arc::new(AtomicBool::new(false));
    let button_states = Arc::new(Mutex::new([false; BUTTON_COUNT]));

    let emulation = std::thread::spawn({
        let sink = view.frame_sink();
        let running = Arc::clone(&running);
        let reset_requested = Arc::clone(&reset_requested);
        let button_states = Arc::clone(&button_states);
        let fps = config.fps;
        move || {
            emulation_loop(
                engine,
                sink,
                sample_queue,
                running,
                reset_requested,
                button_states,
                fps,
            )
        }
    });

    let mut pointer = PointerTranslator::new();

    'main: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => break 'main,

                Event::KeyDown {
                    scancode: Some(Scancode::Escape),
                    ..
                } => break 'main,

                Event::KeyDown {
                    scancode: Some(Scancode::R),
                    repeat: false,
                    ..
                } => reset_requested.store(true, Ordering::Relaxed),

                Event::Window {
                    win_event: WindowEvent::Resized(w, h) | WindowEvent::SizeChanged(w, h),
                    ..
                } => {
                    let (w, h) = (w.max(0) as u32, h.max(0) as u32);
                    view.resized(w, h);
                    surface.resize(w as usize, h as usize);
                }

                other => {
                    if let Some((phase, contacts)) = pointer.translate(&other, video.size()) {
                        view.touch_event(phase, &contacts);
                    }
                }
            }
        }

        *button_states.lock().unwrap() = view.button_states();

        surface.clear(BACKDROP);
        view.draw(&mut surface);
        video.present(&surface);

        // Render pacing handled by VSync (set in Video::new).
    }

    running.store(false, Ordering::Relaxed);
    emulation.join().expect("Emulation thread panicked");
    if let Some(audio) = audio {
        audio.shutdown();
    }
    view.destroy();
}

/// Fixed-rate emulation driver. Runs on its own thread; frames go out
/// through the sink, samples through the queue, button edges in through
/// the shared activation vector.
fn emulation_loop(
    mut engine: Box<dyn Engine>,
    sink: FrameSink,
    sample_queue: Option<SampleQueue>,
    running: Arc<AtomicBool>,
    reset_requested: Arc<AtomicBool>,
    button_states: Arc<Mutex<ButtonStates>>,
    fps: u32,
) {
    use tinyjoy_core::engine::SCREEN_PIXELS;

    let frame_duration = Duration::from_secs_f64(1.0 / fps as f64);
    let samples_per_frame = (engine.sample_rate() / fps).max(1) as usize;
    let max_queued = (engine.sample_rate() / MAX_QUEUED_AUDIO_SECS) as usize;

    let mut pixels = vec![0u32; SCREEN_PIXELS];
    let mut samples = vec![0i16; samples_per_frame];
    let mut last_states: ButtonStates = [false; BUTTON_COUNT];
    let mut next_frame = Instant::now();

    while running.load(Ordering::Relaxed) {
        if reset_requested.swap(false, Ordering::Relaxed) {
            engine.reset();
        }

        let states = *button_states.lock().unwrap();
        for button in ButtonId::ALL {
            let now = states[button.index()];
            if now != last_states[button.index()] {
                engine.button_event(button, now);
            }
        }
        last_states = states;

        if !engine.run_frame(&mut pixels) {
            // The core halted; leave the last frame on screen and wait
            // for a reset or shutdown.
            std::thread::sleep(frame_duration);
            next_frame = Instant::now();
            continue;
        }
        sink.push(&pixels);

        if let Some(queue) = &sample_queue {
            let filled = engine.fill_sound(&mut samples);
            let mut queue = queue.lock().unwrap();
            if queue.len() < max_queued {
                queue.extend(&samples[..filled]);
            }
        }

        next_frame += frame_duration;
        let now = Instant::now();
        if next_frame > now {
            std::thread::sleep(next_frame - now);
        } else {
            // Fell behind; resync rather than bursting to catch up.
            next_frame = now;
        }
    }
}
