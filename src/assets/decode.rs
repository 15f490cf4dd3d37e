use anyhow::Context;
use image::{RgbaImage, imageops};

use crate::{
    LevelupResult,
    foundation::{core::Rgb8, error::LevelupError},
};

/// Decode encoded image bytes (PNG, GIF, ...) into straight RGBA8.
pub fn decode_sheet(bytes: &[u8]) -> LevelupResult<RgbaImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode glyph sheet from memory")?;
    Ok(dyn_img.to_rgba8())
}

/// Make every pixel of colour `key` (and every pixel that is already fully
/// transparent) transparent black.
pub fn key_out(img: &mut RgbaImage, key: Rgb8) {
    for px in img.pixels_mut() {
        if px.0[3] == 0 || key.matches(&px.0) {
            px.0 = [0, 0, 0, 0];
        }
    }
}

/// Nearest-neighbour integer upscale, keeping hard pixel edges.
pub fn upscale_nearest(img: &RgbaImage, scale: u32) -> LevelupResult<RgbaImage> {
    if scale == 0 {
        return Err(LevelupError::glyph("sheet scale must be >= 1"));
    }
    if scale == 1 {
        return Ok(img.clone());
    }
    let (w, h) = img.dimensions();
    let (sw, sh) = w
        .checked_mul(scale)
        .zip(h.checked_mul(scale))
        .ok_or_else(|| LevelupError::glyph("scaled sheet dimensions overflow"))?;
    Ok(imageops::resize(img, sw, sh, imageops::FilterType::Nearest))
}

/// Replace opaque pixels whose weighted colour distance to `from` is at most
/// `distance` (0..=1) with `to`.
///
/// Distance is `sqrt(0.299*dr² + 0.587*dg² + 0.114*db²) / 255`, so the
/// anti-aliased edges of hand-drawn glyphs are recoloured along with the ink.
pub fn replace_color(img: &mut RgbaImage, from: Rgb8, to: Rgb8, distance: f64) {
    for px in img.pixels_mut() {
        if px.0[3] == 0 {
            continue;
        }
        if weighted_distance(&px.0, from) <= distance {
            px.0[0] = to.r;
            px.0[1] = to.g;
            px.0[2] = to.b;
        }
    }
}

fn weighted_distance(px: &[u8; 4], c: Rgb8) -> f64 {
    let d = |a: u8, b: u8| f64::from(a) - f64::from(b);
    let (dr, dg, db) = (d(px[0], c.r), d(px[1], c.g), d(px[2], c.b));
    (0.299 * dr * dr + 0.587 * dg * dg + 0.114 * db * db).sqrt() / 255.0
}

/// Cut a horizontal strip into `count` equal cells, left to right.
pub fn slice_cells(img: &RgbaImage, count: u32) -> LevelupResult<Vec<RgbaImage>> {
    let (w, h) = img.dimensions();
    if count == 0 || w == 0 || h == 0 {
        return Err(LevelupError::glyph("glyph sheet is empty"));
    }
    if !w.is_multiple_of(count) {
        return Err(LevelupError::glyph(format!(
            "glyph sheet width {w} is not a multiple of {count} cells"
        )));
    }
    let cell_w = w / count;
    Ok((0..count)
        .map(|i| imageops::crop_imm(img, i * cell_w, 0, cell_w, h).to_image())
        .collect())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
