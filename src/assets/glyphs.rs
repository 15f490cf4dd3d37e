use std::{path::Path, sync::Arc};

use anyhow::Context as _;
use image::RgbaImage;

use crate::{
    assets::decode,
    foundation::{
        config::Palette,
        error::{LevelupError, LevelupResult},
    },
    text::input::{ALPHABET, glyph_index},
};

/// Which of the two pre-rendered inks a glyph is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum GlyphVariant {
    /// Sheet ink.
    Dim,
    /// Recoloured ink shown on the "on" half of the flash.
    Bright,
}

/// Pixel size of every glyph cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphSize {
    /// Cell width in pixels.
    pub width: u32,
    /// Cell height in pixels.
    pub height: u32,
}

/// One glyph image: straight RGBA8, row-major, alpha 0 means "not drawn".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphBitmap {
    width: u32,
    height: u32,
    rgba8: Arc<Vec<u8>>,
}

impl GlyphBitmap {
    /// Wrap raw RGBA8 pixels, checking the buffer length.
    pub fn new(width: u32, height: u32, rgba8: Vec<u8>) -> LevelupResult<Self> {
        let expected = (width as usize) * (height as usize) * 4;
        if rgba8.len() != expected {
            return Err(LevelupError::glyph(format!(
                "glyph buffer has {} bytes, expected {expected} for {width}x{height}",
                rgba8.len()
            )));
        }
        Ok(Self {
            width,
            height,
            rgba8: Arc::new(rgba8),
        })
    }

    /// A glyph covering its whole cell with one colour.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let rgba8 = rgba.repeat((width as usize) * (height as usize));
        Self {
            width,
            height,
            rgba8: Arc::new(rgba8),
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major RGBA8 bytes.
    pub fn as_raw(&self) -> &[u8] {
        &self.rgba8
    }

    /// Pixel at `(x, y)`, if inside the bitmap.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.rgba8.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    fn from_image(img: RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            rgba8: Arc::new(img.into_raw()),
        }
    }
}

/// Source of glyph bitmaps for the animation core.
///
/// All glyphs share one cell size. The core only asks for characters of
/// [`ALPHABET`]; returning `None` for one of them makes that letter invisible.
pub trait GlyphProvider {
    /// Cell size shared by every glyph.
    fn glyph_size(&self) -> GlyphSize;

    /// Bitmap for `ch` drawn in `variant`.
    fn glyph(&self, variant: GlyphVariant, ch: char) -> Option<&GlyphBitmap>;
}

impl<G: GlyphProvider + ?Sized> GlyphProvider for &G {
    fn glyph_size(&self) -> GlyphSize {
        (**self).glyph_size()
    }

    fn glyph(&self, variant: GlyphVariant, ch: char) -> Option<&GlyphBitmap> {
        (**self).glyph(variant, ch)
    }
}

impl<G: GlyphProvider + ?Sized> GlyphProvider for Arc<G> {
    fn glyph_size(&self) -> GlyphSize {
        (**self).glyph_size()
    }

    fn glyph(&self, variant: GlyphVariant, ch: char) -> Option<&GlyphBitmap> {
        (**self).glyph(variant, ch)
    }
}

/// Default upscale applied to sprite sheets (8px source cells become 16px).
pub const DEFAULT_SHEET_SCALE: u32 = 2;

/// Weighted colour distance under which sheet ink counts as "dim".
pub const BRIGHT_REPLACE_DISTANCE: f64 = 0.5;

/// Dim and bright glyphs for the whole [`ALPHABET`], cut from one sprite sheet.
///
/// The sheet is a single row of equal cells in alphabet order. Pixels in the
/// palette's transparent colour are keyed out; the bright variant replaces the
/// palette's dim ink with its bright ink.
#[derive(Clone, Debug)]
pub struct GlyphAtlas {
    size: GlyphSize,
    dim: Vec<GlyphBitmap>,
    bright: Vec<GlyphBitmap>,
}

impl GlyphAtlas {
    /// Build from encoded image bytes.
    pub fn from_sheet_bytes(bytes: &[u8], palette: &Palette, scale: u32) -> LevelupResult<Self> {
        let sheet = decode::decode_sheet(bytes)?;
        Self::from_sheet_image(sheet, palette, scale)
    }

    /// Read and build from an image file.
    #[tracing::instrument(skip(palette))]
    pub fn from_sheet_path(path: &Path, palette: &Palette, scale: u32) -> LevelupResult<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("read glyph sheet '{}'", path.display()))?;
        Self::from_sheet_bytes(&bytes, palette, scale)
    }

    /// Build from an already decoded sheet.
    pub fn from_sheet_image(
        mut sheet: RgbaImage,
        palette: &Palette,
        scale: u32,
    ) -> LevelupResult<Self> {
        decode::key_out(&mut sheet, palette.transparent);
        let dim_sheet = decode::upscale_nearest(&sheet, scale)?;
        let mut bright_sheet = dim_sheet.clone();
        decode::replace_color(
            &mut bright_sheet,
            palette.dim,
            palette.bright,
            BRIGHT_REPLACE_DISTANCE,
        );

        let count = ALPHABET.chars().count() as u32;
        let dim: Vec<_> = decode::slice_cells(&dim_sheet, count)?
            .into_iter()
            .map(GlyphBitmap::from_image)
            .collect();
        let bright: Vec<_> = decode::slice_cells(&bright_sheet, count)?
            .into_iter()
            .map(GlyphBitmap::from_image)
            .collect();

        let size = GlyphSize {
            width: dim_sheet.width() / count,
            height: dim_sheet.height(),
        };
        tracing::debug!(
            width = size.width,
            height = size.height,
            "glyph atlas prepared"
        );
        Ok(Self { size, dim, bright })
    }
}

impl GlyphProvider for GlyphAtlas {
    fn glyph_size(&self) -> GlyphSize {
        self.size
    }

    fn glyph(&self, variant: GlyphVariant, ch: char) -> Option<&GlyphBitmap> {
        let idx = glyph_index(ch)?;
        match variant {
            GlyphVariant::Dim => self.dim.get(idx),
            GlyphVariant::Bright => self.bright.get(idx),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/glyphs.rs"]
mod tests;
