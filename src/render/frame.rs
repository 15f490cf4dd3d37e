use std::path::Path;

use anyhow::Context as _;

use crate::foundation::{
    core::{Canvas, Rgb8},
    error::LevelupResult,
};

/// An opaque host frame: straight RGBA8, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes, `width * height * 4` long.
    pub data: Vec<u8>,
}

impl FrameRGBA {
    /// A frame of `canvas` size filled with `color`.
    pub fn filled(canvas: Canvas, color: Rgb8) -> Self {
        Self {
            width: canvas.width,
            height: canvas.height,
            data: color.to_rgba().repeat(canvas.area()),
        }
    }

    /// Pixel at `(x, y)`, if inside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Write the frame as a PNG, creating parent directories.
    pub fn save_png(&self, path: &Path) -> LevelupResult<()> {
        crate::encode::ffmpeg::ensure_parent_dir(path)?;
        image::save_buffer_with_format(
            path,
            &self.data,
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}
