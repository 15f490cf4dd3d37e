use crate::foundation::{config::PhysicsConfig, core::Vec2};

/// One character of the revealed text and its entrance state.
#[derive(Clone, Debug, PartialEq)]
pub struct Letter {
    /// Character drawn, always from [`ALPHABET`](crate::ALPHABET).
    pub character: char,
    /// Display line, 0-based.
    pub line_index: usize,
    /// Position within the line, 0-based.
    pub column_index: usize,
    /// Offset of the cell within its line: `(column * glyph_width, 0)`.
    pub cell_position: Vec2,
    /// Offset of the line within the block (horizontal centering, vertical stacking).
    pub line_offset: Vec2,
    /// Frames to wait before moving.
    pub warmup_frames: u32,
    /// Frames waited so far; never exceeds `warmup_frames`.
    pub elapsed_frames: u32,
    /// Vertical velocity in pixels per frame (negative is up).
    pub velocity: f64,
    /// Vertical displacement from the baseline; 0 when resting.
    pub resting_offset: f64,
}

impl Letter {
    /// Whether the warmup has elapsed; unlocked letters move and are drawn.
    pub fn is_unlocked(&self) -> bool {
        self.elapsed_frames >= self.warmup_frames
    }

    /// Unlocked and sitting on the baseline this frame.
    pub fn is_settled(&self) -> bool {
        self.is_unlocked() && self.resting_offset == 0.0
    }

    /// Top-left corner in buffer coordinates.
    pub fn draw_position(&self, block_y_offset: f64) -> Vec2 {
        Vec2::new(
            self.cell_position.x + self.line_offset.x,
            self.cell_position.y + self.resting_offset + self.line_offset.y + block_y_offset,
        )
    }
}

/// Count one warmup frame. Returns whether the letter is unlocked afterwards.
pub fn advance_warmup(letter: &mut Letter) -> bool {
    if letter.elapsed_frames < letter.warmup_frames {
        letter.elapsed_frames += 1;
    }
    letter.is_unlocked()
}

/// One frame of falling-in physics for an unlocked letter.
///
/// Gravity, then damping, then integration; crossing below the baseline
/// clamps to it and reflects a fraction of the velocity. Locked letters are
/// left untouched.
pub fn step_physics(letter: &mut Letter, physics: &PhysicsConfig) {
    if !letter.is_unlocked() {
        return;
    }
    letter.velocity += physics.gravity;
    letter.velocity *= physics.damping;
    letter.resting_offset += letter.velocity;
    if letter.resting_offset > 0.0 {
        letter.resting_offset = 0.0;
        letter.velocity *= -physics.restitution;
    }
}

/// Full per-frame update of one letter: warmup, then physics once unlocked.
pub fn tick_letter(letter: &mut Letter, physics: &PhysicsConfig) {
    if advance_warmup(letter) {
        step_physics(letter, physics);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/letter.rs"]
mod tests;
