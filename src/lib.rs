//! levelup renders the retro RPG "level up!" text reveal.
//!
//! A short string is wrapped into at most three centered lines of bitmap
//! glyphs. Each letter waits out a warmup that sweeps diagonally across the
//! block, jumps up and bounces back onto its baseline, while every letter
//! strobes between a dim and a bright glyph variant. Once everything has
//! landed the text holds for a fixed number of frames and then clears.
//!
//! # Pipeline overview
//!
//! 1. **Validate**: `&str -> RevealText` (only `a-z . ! ' space`)
//! 2. **Layout**: `RevealText -> lines -> Timeline` (letters with cells, offsets, warmups)
//! 3. **Animate**: [`TextEffect::update`] once per host tick (warmup, flash, physics)
//! 4. **Draw**: letters are blitted into a colour-keyed [`Surface`] the host composites
//! 5. **Host** (optional): [`render_frame`] / [`render_to_mp4`] drive the effect headlessly
//!
//! Everything is counted in frames; nothing reads the wall clock, so a given
//! text and [`EffectConfig`] always produce the same frames.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod assets;
mod effect;
mod encode;
mod foundation;
mod layout;
mod render;
mod text;

pub use animation::flash::FlashController;
pub use animation::letter::{Letter, advance_warmup, step_physics, tick_letter};
pub use assets::decode::{decode_sheet, key_out, replace_color, slice_cells, upscale_nearest};
pub use assets::glyphs::{
    BRIGHT_REPLACE_DISTANCE, DEFAULT_SHEET_SCALE, GlyphAtlas, GlyphBitmap, GlyphProvider,
    GlyphSize, GlyphVariant,
};
pub use effect::text_effect::{EffectState, TextEffect, UpdateStatus};
pub use encode::ffmpeg::{
    EncodeConfig, FfmpegEncoder, default_mp4_config, ensure_parent_dir, is_ffmpeg_on_path,
};
pub use foundation::config::{
    EffectConfig, FlashConfig, LayoutConfig, Palette, PhysicsConfig, TimelineConfig,
};
pub use foundation::core::{Canvas, FrameIndex, Rgb8, Vec2};
pub use foundation::error::{LevelupError, LevelupResult};
pub use layout::lines::{ELLIPSIS, wrap_lines};
pub use layout::timeline::{Timeline, build_timeline};
pub use render::frame::FrameRGBA;
pub use render::pipeline::{
    EffectFrames, RenderOpts, RenderToMp4Opts, compose_frame, render_effect_frames, render_frame,
    render_to_mp4,
};
pub use render::surface::Surface;
pub use text::input::{
    ALPHABET, DEFAULT_TEXT, RevealText, SYNTAX_ERROR_MESSAGE, glyph_index, is_supported,
};
