use crate::{
    assets::glyphs::GlyphBitmap,
    foundation::core::{Canvas, Rgb8},
    render::frame::FrameRGBA,
};

/// Fixed-size RGBA8 off-screen buffer with a colour key.
///
/// Pixels equal to the key colour are "empty": [`Surface::composite_onto`]
/// skips them, the way a colour-keyed sprite surface is blitted onto a window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    canvas: Canvas,
    key: Rgb8,
    data: Vec<u8>,
}

impl Surface {
    /// A buffer of `canvas` size filled with `key`.
    pub fn new(canvas: Canvas, key: Rgb8) -> Self {
        Self {
            canvas,
            key,
            data: key.to_rgba().repeat(canvas.area()),
        }
    }

    /// Buffer size.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// The transparent sentinel colour.
    pub fn key(&self) -> Rgb8 {
        self.key
    }

    /// Row-major RGBA8 bytes.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Reset every pixel to the key colour.
    pub fn clear(&mut self) {
        let key = self.key.to_rgba();
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&key);
        }
    }

    /// Whether every pixel is the key colour.
    pub fn is_clear(&self) -> bool {
        self.data.chunks_exact(4).all(|px| self.key.matches(px))
    }

    /// Pixel at `(x, y)`, if inside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.canvas.width || y >= self.canvas.height {
            return None;
        }
        let i = self.index(x, y);
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Copy the drawn (non-zero alpha) pixels of `glyph` with its top-left
    /// corner at `(x, y)`, clipped to the buffer. Drawn pixels become opaque.
    pub fn blit(&mut self, glyph: &GlyphBitmap, x: i32, y: i32) {
        let (w, h) = (self.canvas.width as i64, self.canvas.height as i64);
        for gy in 0..glyph.height() {
            let dy = i64::from(y) + i64::from(gy);
            if dy < 0 || dy >= h {
                continue;
            }
            for gx in 0..glyph.width() {
                let dx = i64::from(x) + i64::from(gx);
                if dx < 0 || dx >= w {
                    continue;
                }
                let Some(px) = glyph.pixel(gx, gy) else {
                    continue;
                };
                if px[3] == 0 {
                    continue;
                }
                let i = self.index(dx as u32, dy as u32);
                self.data[i..i + 3].copy_from_slice(&px[..3]);
                self.data[i + 3] = 255;
            }
        }
    }

    /// Copy every non-key pixel onto `dst` with this buffer's origin at
    /// `(x, y)`, clipped to `dst`.
    pub fn composite_onto(&self, dst: &mut FrameRGBA, x: i32, y: i32) {
        let (w, h) = (i64::from(dst.width), i64::from(dst.height));
        for sy in 0..self.canvas.height {
            let dy = i64::from(y) + i64::from(sy);
            if dy < 0 || dy >= h {
                continue;
            }
            for sx in 0..self.canvas.width {
                let dx = i64::from(x) + i64::from(sx);
                if dx < 0 || dx >= w {
                    continue;
                }
                let si = self.index(sx, sy);
                let src = &self.data[si..si + 4];
                if self.key.matches(src) {
                    continue;
                }
                let di = ((dy as usize) * (dst.width as usize) + dx as usize) * 4;
                dst.data[di..di + 4].copy_from_slice(src);
            }
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.canvas.width as usize) + (x as usize)) * 4
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
