//! Runtime configuration: a TOML file in the user config directory with
//! command line overrides on top.

use std::path::PathBuf;

use clap::Parser;
use serde::Deserialize;

pub const DEFAULT_FPS: u32 = 60;
pub const DEFAULT_WINDOW_SCALE: u32 = 4;

#[derive(Parser, Debug)]
#[command(name = "tinyjoy", about = "Handheld console emulator shell")]
pub struct Args {
    /// Emulation frame rate
    #[arg(long)]
    pub fps: Option<u32>,

    /// Initial window scale factor
    #[arg(long)]
    pub scale: Option<u32>,

    /// Display density override (1.0 = 160 dpi)
    #[arg(long)]
    pub density: Option<f32>,

    /// Skin artwork PNG
    #[arg(long)]
    pub skin: Option<PathBuf>,

    /// Glass overlay PNG blended above the screen
    #[arg(long)]
    pub glass: Option<PathBuf>,
}

/// On-disk shape of `config.toml`. Every field is optional so a partial
/// file is valid.
#[derive(Deserialize, Debug, Default)]
pub struct FileConfig {
    pub fps: Option<u32>,
    pub window_scale: Option<u32>,
    pub density: Option<f32>,
    pub skin: Option<PathBuf>,
    pub glass: Option<PathBuf>,
}

impl FileConfig {
    /// Read `<config dir>/tinyjoy/config.toml`, or defaults when the file
    /// does not exist.
    pub fn load_default() -> Self {
        match dirs::config_dir() {
            Some(dir) => Self::load_from(&dir.join("tinyjoy").join("config.toml")),
            None => Self::default(),
        }
    }

    /// A missing file is silently empty; a malformed one warns and falls
    /// back to defaults rather than aborting.
    pub fn load_from(path: &std::path::Path) -> Self {
        let Ok(text) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        match toml::from_str(&text) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: ignoring malformed {}: {e}", path.display());
                Self::default()
            }
        }
    }
}

/// Fully resolved settings: file values with command line overrides, and
/// defaults filling the rest.
#[derive(Debug)]
pub struct Config {
    pub fps: u32,
    pub window_scale: u32,
    pub density: Option<f32>,
    pub skin: Option<PathBuf>,
    pub glass: Option<PathBuf>,
}

impl Config {
    pub fn resolve(file: FileConfig, args: Args) -> Self {
        Self {
            fps: args.fps.or(file.fps).unwrap_or(DEFAULT_FPS).max(1),
            window_scale: args
                .scale
                .or(file.window_scale)
                .unwrap_or(DEFAULT_WINDOW_SCALE)
                .max(1),
            density: args.density.or(file.density),
            skin: args.skin.or(file.skin),
            glass: args.glass.or(file.glass),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_args() -> Args {
        Args {
            fps: None,
            scale: None,
            density: None,
            skin: None,
            glass: None,
        }
    }

    #[test]
    fn defaults_apply_when_everything_is_absent() {
        let config = Config::resolve(FileConfig::default(), no_args());
        assert_eq!(config.fps, DEFAULT_FPS);
        assert_eq!(config.window_scale, DEFAULT_WINDOW_SCALE);
        assert!(config.density.is_none());
        assert!(config.skin.is_none());
    }

    #[test]
    fn command_line_beats_the_file() {
        let file = FileConfig {
            fps: Some(30),
            window_scale: Some(2),
            ..Default::default()
        };
        let mut args = no_args();
        args.fps = Some(50);
        let config = Config::resolve(file, args);
        assert_eq!(config.fps, 50);
        assert_eq!(config.window_scale, 2);
    }

    #[test]
    fn partial_file_parses() {
        let file: FileConfig = toml::from_str("fps = 30\nskin = \"art/skin.png\"").unwrap();
        assert_eq!(file.fps, Some(30));
        assert_eq!(file.skin, Some(PathBuf::from("art/skin.png")));
        assert!(file.glass.is_none());
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("tinyjoy-config-malformed-test.toml");
        std::fs::write(&path, "fps = \"not a number\"").unwrap();
        let file = FileConfig::load_from(&path);
        assert!(file.fps.is_none());
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_file_is_empty() {
        let file = FileConfig::load_from(std::path::Path::new("/nonexistent/config.toml"));
        assert!(file.fps.is_none());
        assert!(file.window_scale.is_none());
    }

    #[test]
    fn zero_values_are_clamped() {
        let mut args = no_args();
        args.fps = Some(0);
        args.scale = Some(0);
        let config = Config::resolve(FileConfig::default(), args);
        assert_eq!(config.fps, 1);
        assert_eq!(config.window_scale, 1);
    }
}
