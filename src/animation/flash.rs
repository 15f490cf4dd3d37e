use crate::{assets::glyphs::GlyphVariant, foundation::config::FlashConfig};

/// Frame counter driving the dim/bright strobe shared by all letters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlashController {
    counter: u32,
    cycle: u32,
    flip: u32,
}

impl FlashController {
    /// Controller at the start of a cycle. A zero `cycle` is treated as 1.
    pub fn new(cfg: &FlashConfig) -> Self {
        Self {
            counter: 0,
            cycle: cfg.cycle.max(1),
            flip: cfg.flip,
        }
    }

    /// Advance one frame and return the variant to draw with.
    pub fn tick(&mut self) -> GlyphVariant {
        self.counter = (self.counter + 1) % self.cycle;
        self.variant()
    }

    /// Variant for the current counter value.
    pub fn variant(&self) -> GlyphVariant {
        if self.counter < self.flip {
            GlyphVariant::Dim
        } else {
            GlyphVariant::Bright
        }
    }

    /// Current counter value, always `< cycle`.
    pub fn counter(&self) -> u32 {
        self.counter
    }

    /// Back to the start of a cycle.
    pub fn reset(&mut self) {
        self.counter = 0;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/flash.rs"]
mod tests;
