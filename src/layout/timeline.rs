use crate::{
    animation::letter::Letter,
    assets::glyphs::GlyphSize,
    foundation::{
        config::{PhysicsConfig, TimelineConfig},
        core::{Canvas, Vec2},
    },
};

/// Letters of a wrapped text, positioned and staggered.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Timeline {
    /// Every character of every line, line by line.
    pub letters: Vec<Letter>,
    /// Vertical offset of the whole block inside the canvas.
    pub block_y_offset: f64,
}

/// Lay out `lines` inside `canvas` and assign each letter its warmup.
///
/// Lines are centred horizontally. The block is centred vertically with the
/// approximation `height/2 - glyph_height/2 * line_count`, which ignores the
/// line gap. Warmups grow along columns and down lines, and shorter lines
/// start later by half their length difference to the longest line, giving a
/// diagonal wipe. Halfway warmups round to even.
pub fn build_timeline(
    lines: &[String],
    glyph: GlyphSize,
    canvas: Canvas,
    cfg: &TimelineConfig,
    physics: &PhysicsConfig,
) -> Timeline {
    let gw = f64::from(glyph.width);
    let gh = f64::from(glyph.height);
    let line_count = lines.len() as f64;
    let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    let block_y_offset = f64::from(canvas.height) / 2.0 - (gh / 2.0) * line_count;

    let mut letters = Vec::with_capacity(lines.iter().map(String::len).sum());
    for (l, line) in lines.iter().enumerate() {
        let chars = line.chars().count();
        let line_offset = Vec2::new(
            f64::from(canvas.width) / 2.0 - (chars as f64 * gw) / 2.0,
            l as f64 * gh + cfg.line_gap_px * l as f64,
        );
        let diff = (longest - chars) as f64 / 2.0;

        for (n, character) in line.chars().enumerate() {
            let warmup = cfg.diff_weight * diff
                + cfg.column_weight * n as f64
                + cfg.line_weight * l as f64;
            letters.push(Letter {
                character,
                line_index: l,
                column_index: n,
                cell_position: Vec2::new(n as f64 * gw, 0.0),
                line_offset,
                warmup_frames: warmup.round_ties_even().max(0.0) as u32,
                elapsed_frames: 0,
                velocity: physics.initial_velocity,
                resting_offset: 0.0,
            });
        }
    }

    Timeline {
        letters,
        block_y_offset,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/timeline.rs"]
mod tests;
