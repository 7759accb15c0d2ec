use clap::Parser;

use tinyjoy_view::pixmap::Pixmap;
use tinyjoy_view::view::{EmulatorView, fallback_skin};

mod audio;
mod config;
mod demo;
mod emulator;
mod input;
mod video;

fn main() {
    let args = config::Args::parse();
    let file = config::FileConfig::load_default();
    let config = config::Config::resolve(file, args);

    let skin = match &config.skin {
        Some(path) => load_pixmap(path),
        None => fallback_skin(),
    };
    let glass = config.glass.as_ref().map(|path| load_pixmap(path));

    let view = EmulatorView::new(skin, glass, 1.0);
    let engine = Box::new(demo::DemoEngine::new());

    emulator::run(view, engine, &config);
}

fn load_pixmap(path: &std::path::Path) -> Pixmap {
    let data = std::fs::read(path).unwrap_or_else(|e| {
        eprintln!("Failed to read {}: {e}", path.display());
        std::process::exit(1);
    });
    Pixmap::decode_png(&data).unwrap_or_else(|e| {
        eprintln!("Failed to decode {}: {e}", path.display());
        std::process::exit(1);
    })
}
