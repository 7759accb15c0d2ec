use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::video::{Window, WindowContext};

use tinyjoy_view::surface::Surface;

pub struct Video {
    canvas: Canvas<Window>,
    texture_creator: TextureCreator<WindowContext>,
    staging: Vec<u8>,
}

impl Video {
    /// Create a resizable SDL window and renderer.
    pub fn new(sdl_video: &sdl2::VideoSubsystem, title: &str, width: u32, height: u32) -> Self {
        let window = sdl_video
            .window(title, width, height)
            .position_centered()
            .resizable()
            .build()
            .expect("Failed to create window");

        let canvas = window
            .into_canvas()
            .accelerated()
            .present_vsync()
            .build()
            .expect("Failed to create canvas");

        let texture_creator = canvas.texture_creator();

        Self {
            canvas,
            texture_creator,
            staging: Vec::new(),
        }
    }

    /// Current drawable size of the window in pixels.
    pub fn size(&self) -> (u32, u32) {
        self.canvas.window().size()
    }

    /// Upload the composed surface as an RGB24 texture and present it.
    pub fn present(&mut self, surface: &Surface) {
        let (w, h) = (surface.width() as u32, surface.height() as u32);
        if w == 0 || h == 0 {
            return;
        }
        surface.to_rgb24(&mut self.staging);

        let mut texture = self
            .texture_creator
            .create_texture_streaming(PixelFormatEnum::RGB24, w, h)
            .expect("Failed to create texture");

        texture
            .update(None, &self.staging, (w * 3) as usize)
            .expect("Failed to update texture");

        self.canvas.clear();
        self.canvas
            .copy(&texture, None, None)
            .expect("Failed to copy texture");
        self.canvas.present();
    }
}
