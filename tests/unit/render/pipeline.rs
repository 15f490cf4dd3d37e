use image::RgbaImage;

use super::*;
use crate::{assets::glyphs::GlyphAtlas, foundation::config::Palette};

// Every glyph is a solid 16x16 block of dim ink.
fn block_atlas() -> GlyphAtlas {
    let palette = Palette::default();
    let sheet = RgbaImage::from_pixel(30 * 8, 8, image::Rgba(palette.dim.to_rgba()));
    GlyphAtlas::from_sheet_image(sheet, &palette, 2).unwrap()
}

fn text(s: &str) -> RevealText {
    RevealText::parse(s).unwrap()
}

#[test]
fn first_frame_shows_only_the_first_letter() {
    let cfg = EffectConfig::default();
    let atlas = block_atlas();
    let frame = render_frame(&text("level up!"), &cfg, &atlas, FrameIndex(0));

    assert_eq!((frame.width, frame.height), (300, 200));
    assert_eq!(frame.pixel(0, 0), Some(cfg.palette.background.to_rgba()));
    assert_eq!(frame.pixel(110, 77), Some(cfg.palette.dim.to_rgba()));
    assert_eq!(frame.pixel(130, 85), Some(cfg.palette.background.to_rgba()));
}

#[test]
fn third_frame_is_bright() {
    let cfg = EffectConfig::default();
    let atlas = block_atlas();
    let frame = render_frame(&text("level up!"), &cfg, &atlas, FrameIndex(2));
    assert_eq!(frame.pixel(110, 66), Some(cfg.palette.bright.to_rgba()));
    assert_eq!(frame.pixel(110, 65), Some(cfg.palette.background.to_rgba()));
}

#[test]
fn frames_iterator_matches_single_frame_renders() {
    let cfg = EffectConfig::default();
    let atlas = block_atlas();
    let frames: Vec<_> =
        render_effect_frames(&text("go"), &cfg, &atlas, RenderOpts::default())
            .take(20)
            .collect();
    for idx in [0u64, 7, 19] {
        assert_eq!(
            frames[idx as usize],
            render_frame(&text("go"), &cfg, &atlas, FrameIndex(idx))
        );
    }
}

#[test]
fn frames_run_until_clear_plus_tail() {
    let cfg = EffectConfig::default();
    let atlas = block_atlas();
    let opts = RenderOpts {
        tail_frames: 5,
        ..RenderOpts::default()
    };
    let frames: Vec<_> = render_effect_frames(&text("go"), &cfg, &atlas, opts).collect();
    let background = FrameRGBA::filled(cfg.canvas, cfg.palette.background);

    let n = frames.len();
    assert!(n > 50 + 6, "{n}");
    assert!(frames[n - 6..].iter().all(|f| *f == background));
    assert_ne!(frames[n - 7], background);
}

#[test]
fn frame_cap_stops_effects_that_never_settle() {
    let mut cfg = EffectConfig::default();
    cfg.physics.gravity = 0.0;
    let atlas = block_atlas();
    let opts = RenderOpts {
        tail_frames: 10,
        max_frames: 100,
    };
    assert_eq!(
        render_effect_frames(&text("go"), &cfg, &atlas, opts).count(),
        100
    );
}

#[test]
fn compose_of_idle_effect_is_background() {
    let cfg = EffectConfig::default();
    let effect = TextEffect::new(cfg.clone(), block_atlas());
    assert_eq!(
        compose_frame(&effect, cfg.palette.background),
        FrameRGBA::filled(cfg.canvas, cfg.palette.background)
    );
}

#[test]
fn frames_after_clear_are_background_without_replaying_ticks() {
    let cfg = EffectConfig::default();
    let atlas = block_atlas();
    let background = FrameRGBA::filled(cfg.canvas, cfg.palette.background);
    assert_eq!(
        render_frame(&text("go"), &cfg, &atlas, FrameIndex(u64::MAX)),
        background
    );
}
