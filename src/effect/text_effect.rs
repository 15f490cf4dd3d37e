use crate::{
    animation::{
        flash::FlashController,
        letter::{Letter, advance_warmup, step_physics},
    },
    assets::glyphs::{GlyphProvider, GlyphVariant},
    foundation::config::EffectConfig,
    layout::{lines::wrap_lines, timeline::build_timeline},
    render::surface::Surface,
    text::input::RevealText,
};

/// Lifecycle of a [`TextEffect`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EffectState {
    /// No letters; a new text may be triggered.
    Empty,
    /// Letters are warming up or bouncing in.
    Revealing,
    /// Every letter has landed; the hold countdown is running.
    Holding,
}

/// What one [`TextEffect::update`] call did to the off-screen buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UpdateStatus {
    /// Nothing is showing; the buffer was not touched.
    Idle,
    /// The buffer was repainted with the current frame.
    Repainted,
    /// The hold ran out; letters were discarded and the buffer cleared.
    Cleared,
}

impl UpdateStatus {
    /// Whether the host should composite the buffer this frame.
    pub fn should_composite(self) -> bool {
        matches!(self, Self::Repainted | Self::Cleared)
    }
}

/// The level-up text reveal.
///
/// Owns the letters of the current text, the flash strobe, the hold countdown
/// and a colour-keyed off-screen buffer. The host calls [`TextEffect::update`]
/// once per tick; everything is counted in frames, never wall-clock time.
///
/// ```text
/// Empty --trigger--> Revealing --all settled--> Holding --countdown--> Empty
/// ```
///
/// The countdown only advances on frames where every letter is settled, so a
/// letter caught mid-bounce pauses it. A letter still in its warmup is not
/// settled even though it sits at offset 0, so the hold cannot start before
/// the last letter has unlocked and landed.
pub struct TextEffect<G> {
    config: EffectConfig,
    glyphs: G,
    surface: Surface,
    flash: FlashController,
    lines: Vec<String>,
    letters: Vec<Letter>,
    block_y_offset: f64,
    hold_remaining: u32,
    state: EffectState,
}

impl<G: GlyphProvider> TextEffect<G> {
    /// An idle effect with a clear buffer.
    pub fn new(config: EffectConfig, glyphs: G) -> Self {
        let surface = Surface::new(config.canvas, config.palette.transparent);
        let flash = FlashController::new(&config.flash);
        let hold_remaining = config.hold_frames;
        Self {
            config,
            glyphs,
            surface,
            flash,
            lines: Vec::new(),
            letters: Vec::new(),
            block_y_offset: 0.0,
            hold_remaining,
            state: EffectState::Empty,
        }
    }

    /// An effect already revealing `text`.
    pub fn with_text(config: EffectConfig, glyphs: G, text: &RevealText) -> Self {
        let mut effect = Self::new(config, glyphs);
        effect.trigger(text);
        effect
    }

    /// Start revealing `text`.
    ///
    /// Only accepted while [`EffectState::Empty`]; returns `false` and leaves
    /// the running effect untouched otherwise.
    #[tracing::instrument(skip_all, fields(text = %text))]
    pub fn trigger(&mut self, text: &RevealText) -> bool {
        if self.state != EffectState::Empty {
            tracing::debug!(state = ?self.state, "trigger ignored while effect is running");
            return false;
        }

        self.lines = wrap_lines(text, &self.config.layout);
        let timeline = build_timeline(
            &self.lines,
            self.glyphs.glyph_size(),
            self.config.canvas,
            &self.config.timeline,
            &self.config.physics,
        );
        self.letters = timeline.letters;
        self.block_y_offset = timeline.block_y_offset;
        self.flash.reset();
        self.hold_remaining = self.config.hold_frames;
        self.surface.clear();
        self.state = EffectState::Revealing;

        tracing::debug!(
            lines = ?self.lines,
            letters = self.letters.len(),
            "reveal started"
        );
        true
    }

    /// Advance one frame and repaint the buffer.
    pub fn update(&mut self) -> UpdateStatus {
        if self.state == EffectState::Empty {
            return UpdateStatus::Idle;
        }

        for letter in &mut self.letters {
            advance_warmup(letter);
        }
        let variant = self.flash.tick();
        for letter in &mut self.letters {
            step_physics(letter, &self.config.physics);
        }
        self.repaint(variant);

        if !self.letters.iter().all(Letter::is_settled) {
            return UpdateStatus::Repainted;
        }

        if self.state == EffectState::Revealing {
            tracing::debug!(hold_frames = self.hold_remaining, "all letters settled");
            self.state = EffectState::Holding;
        }
        if self.hold_remaining > 0 {
            self.hold_remaining -= 1;
            return UpdateStatus::Repainted;
        }

        self.clear();
        UpdateStatus::Cleared
    }

    fn repaint(&mut self, variant: GlyphVariant) {
        self.surface.clear();
        for letter in self.letters.iter().filter(|l| l.is_unlocked()) {
            let Some(glyph) = self.glyphs.glyph(variant, letter.character) else {
                tracing::warn!(character = ?letter.character, "no glyph for character");
                continue;
            };
            let pos = letter.draw_position(self.block_y_offset);
            self.surface.blit(glyph, pos.x as i32, pos.y as i32);
        }
    }

    fn clear(&mut self) {
        self.letters.clear();
        self.lines.clear();
        self.flash.reset();
        self.surface.clear();
        self.state = EffectState::Empty;
        tracing::debug!("reveal cleared");
    }
}

impl<G> TextEffect<G> {
    /// Current lifecycle state.
    pub fn state(&self) -> EffectState {
        self.state
    }

    /// Whether a new text may be triggered.
    pub fn is_empty(&self) -> bool {
        self.state == EffectState::Empty
    }

    /// Letters of the current text (empty once cleared).
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Wrapped lines of the current text.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Off-screen buffer to composite onto the host window.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Settled frames left before the text clears.
    pub fn hold_remaining(&self) -> u32 {
        self.hold_remaining
    }

    /// Variant the letters were last drawn with.
    pub fn flash_variant(&self) -> GlyphVariant {
        self.flash.variant()
    }

    /// Configuration the effect runs with.
    pub fn config(&self) -> &EffectConfig {
        &self.config
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effect/text_effect.rs"]
mod tests;
