use std::io::Cursor;

use super::*;

// 30 cells of 8x8 on a magenta background; cell `i` has one ink pixel at
// (i % 8, i / 8).
fn marker_sheet(palette: &Palette) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(30 * 8, 8, image::Rgba(palette.transparent.to_rgba()));
    for i in 0..30u32 {
        img.put_pixel(i * 8 + i % 8, i / 8, image::Rgba(palette.dim.to_rgba()));
    }
    img
}

#[test]
fn atlas_slices_scales_and_recolours() {
    let palette = Palette::default();
    let atlas = GlyphAtlas::from_sheet_image(marker_sheet(&palette), &palette, 2).unwrap();
    assert_eq!(
        atlas.glyph_size(),
        GlyphSize {
            width: 16,
            height: 16
        }
    );

    // 'c' is cell 2: ink at source (2, 0) -> scaled block (4..6, 0..2).
    let dim = atlas.glyph(GlyphVariant::Dim, 'c').unwrap();
    let bright = atlas.glyph(GlyphVariant::Bright, 'c').unwrap();
    assert_eq!(dim.pixel(4, 0), Some(palette.dim.to_rgba()));
    assert_eq!(dim.pixel(5, 1), Some(palette.dim.to_rgba()));
    assert_eq!(bright.pixel(4, 0), Some(palette.bright.to_rgba()));
    assert_eq!(dim.pixel(0, 0), Some([0, 0, 0, 0]));
    assert_eq!(bright.pixel(6, 0), Some([0, 0, 0, 0]));

    // space is the last cell (29): ink at source (5, 3).
    let space = atlas.glyph(GlyphVariant::Dim, ' ').unwrap();
    assert_eq!(space.pixel(10, 6), Some(palette.dim.to_rgba()));
}

#[test]
fn atlas_rejects_unknown_characters() {
    let palette = Palette::default();
    let atlas = GlyphAtlas::from_sheet_image(marker_sheet(&palette), &palette, 1).unwrap();
    assert!(atlas.glyph(GlyphVariant::Dim, 'A').is_none());
    assert!(atlas.glyph(GlyphVariant::Bright, '?').is_none());
    assert_eq!(atlas.glyph_size().width, 8);
}

#[test]
fn atlas_from_png_bytes() {
    let palette = Palette::default();
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(marker_sheet(&palette))
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    let atlas = GlyphAtlas::from_sheet_bytes(&buf, &palette, DEFAULT_SHEET_SCALE).unwrap();
    assert!(atlas.glyph(GlyphVariant::Bright, '!').is_some());
}

#[test]
fn atlas_rejects_bad_sheets() {
    let palette = Palette::default();
    assert!(GlyphAtlas::from_sheet_image(RgbaImage::new(29, 8), &palette, 2).is_err());
    assert!(GlyphAtlas::from_sheet_image(RgbaImage::new(30, 1), &palette, 0).is_err());
    assert!(
        GlyphAtlas::from_sheet_path(Path::new("does/not/exist.png"), &palette, 2).is_err()
    );
}

#[test]
fn bitmap_new_checks_length() {
    assert!(GlyphBitmap::new(2, 2, vec![0; 16]).is_ok());
    assert!(GlyphBitmap::new(2, 2, vec![0; 15]).is_err());
    let solid = GlyphBitmap::solid(3, 2, [1, 2, 3, 255]);
    assert_eq!(solid.pixel(2, 1), Some([1, 2, 3, 255]));
    assert_eq!(solid.pixel(3, 0), None);
}

#[test]
fn provider_is_usable_through_references_and_arcs() {
    fn size_of(p: impl GlyphProvider) -> GlyphSize {
        p.glyph_size()
    }
    let palette = Palette::default();
    let atlas = GlyphAtlas::from_sheet_image(marker_sheet(&palette), &palette, 1).unwrap();
    assert_eq!(size_of(&atlas).height, 8);
    assert_eq!(size_of(Arc::new(atlas)).height, 8);
}
