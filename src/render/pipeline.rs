use std::path::Path;

use crate::{
    assets::glyphs::GlyphProvider,
    effect::text_effect::{TextEffect, UpdateStatus},
    encode::ffmpeg::{FfmpegEncoder, default_mp4_config},
    foundation::{
        config::EffectConfig,
        core::{FrameIndex, Rgb8},
        error::LevelupResult,
    },
    render::frame::FrameRGBA,
    text::input::RevealText,
};

/// Fill a host frame with `background` and composite the effect buffer on top.
pub fn compose_frame<G>(effect: &TextEffect<G>, background: Rgb8) -> FrameRGBA {
    let surface = effect.surface();
    let mut frame = FrameRGBA::filled(surface.canvas(), background);
    surface.composite_onto(&mut frame, 0, 0);
    frame
}

/// Render what the host window shows on tick `frame` (0-based) after
/// triggering `text` on tick 0.
///
/// Runs up to `frame + 1` updates from scratch, so the result only depends on
/// the inputs. Once the effect has cleared every later frame is background
/// only, so the loop stops there.
#[tracing::instrument(skip_all, fields(text = %text, frame = frame.0))]
pub fn render_frame<G: GlyphProvider>(
    text: &RevealText,
    config: &EffectConfig,
    glyphs: G,
    frame: FrameIndex,
) -> FrameRGBA {
    let mut effect = TextEffect::with_text(config.clone(), glyphs, text);
    for _ in 0..=frame.0 {
        if effect.update() == UpdateStatus::Cleared {
            break;
        }
    }
    compose_frame(&effect, config.palette.background)
}

/// Bounds for [`render_effect_frames`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOpts {
    /// Background-only frames appended after the effect clears.
    pub tail_frames: u64,
    /// Hard cap on emitted frames, for configs that never settle.
    pub max_frames: u64,
}

impl Default for RenderOpts {
    fn default() -> Self {
        Self {
            tail_frames: 0,
            max_frames: 60 * 60,
        }
    }
}

/// Iterator over host frames, one per tick, from trigger until the effect is
/// empty again (plus the tail).
pub struct EffectFrames<G> {
    effect: TextEffect<G>,
    background: Rgb8,
    opts: RenderOpts,
    tail_left: u64,
    emitted: u64,
}

impl<G: GlyphProvider> Iterator for EffectFrames<G> {
    type Item = FrameRGBA;

    fn next(&mut self) -> Option<Self::Item> {
        if self.emitted >= self.opts.max_frames {
            return None;
        }

        if self.effect.is_empty() {
            if self.tail_left == 0 {
                return None;
            }
            self.tail_left -= 1;
        } else if self.effect.update() == UpdateStatus::Cleared {
            tracing::debug!(frames = self.emitted + 1, "effect cleared");
        }

        self.emitted += 1;
        if self.emitted == self.opts.max_frames && !self.effect.is_empty() {
            tracing::warn!(
                max_frames = self.opts.max_frames,
                "effect still running at frame cap"
            );
        }
        Some(compose_frame(&self.effect, self.background))
    }
}

/// Frames of the whole effect for `text`, as a host running at
/// `config.fps` would show them.
pub fn render_effect_frames<G: GlyphProvider>(
    text: &RevealText,
    config: &EffectConfig,
    glyphs: G,
    opts: RenderOpts,
) -> EffectFrames<G> {
    EffectFrames {
        effect: TextEffect::with_text(config.clone(), glyphs, text),
        background: config.palette.background,
        opts,
        tail_left: opts.tail_frames,
        emitted: 0,
    }
}

/// Options for [`render_to_mp4`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderToMp4Opts {
    /// Frame bounds.
    pub render: RenderOpts,
    /// Replace an existing output file.
    pub overwrite: bool,
}

impl Default for RenderToMp4Opts {
    fn default() -> Self {
        Self {
            render: RenderOpts::default(),
            overwrite: true,
        }
    }
}

/// Encode the whole effect for `text` to an MP4 at `out` (needs `ffmpeg`).
///
/// Returns the number of frames written.
#[tracing::instrument(skip_all, fields(text = %text, out = %out.display()))]
pub fn render_to_mp4<G: GlyphProvider>(
    text: &RevealText,
    config: &EffectConfig,
    glyphs: G,
    out: &Path,
    opts: RenderToMp4Opts,
) -> LevelupResult<u64> {
    config.validate()?;
    let mut enc_cfg = default_mp4_config(out, config.canvas.width, config.canvas.height, config.fps);
    enc_cfg.overwrite = opts.overwrite;

    let mut encoder = FfmpegEncoder::new(enc_cfg)?;
    for frame in render_effect_frames(text, config, glyphs, opts.render) {
        encoder.encode_frame(&frame)?;
    }
    encoder.finish()
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
