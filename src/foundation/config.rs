use std::path::Path;

use anyhow::Context as _;

use crate::foundation::{
    core::{Canvas, Rgb8},
    error::{LevelupError, LevelupResult},
};

/// Everything that tunes one text effect and the host that displays it.
///
/// Every field has a default matching the classic look, so a JSON config only
/// needs the keys it overrides.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EffectConfig {
    /// Size of the off-screen buffer (and of the headless host frame).
    pub canvas: Canvas,
    /// Nominal host tick rate. Animation math counts frames, this only feeds encoders.
    pub fps: u32,
    /// Settled frames to wait before the text clears.
    pub hold_frames: u32,
    /// Line wrapping limits.
    pub layout: LayoutConfig,
    /// Entrance stagger weights.
    pub timeline: TimelineConfig,
    /// Per-letter bounce physics.
    pub physics: PhysicsConfig,
    /// Dim/bright strobe cycle.
    pub flash: FlashConfig,
    /// Colours for glyph recolouring, the transparent key and the host background.
    pub palette: Palette,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas {
                width: 300,
                height: 200,
            },
            fps: 60,
            hold_frames: 50,
            layout: LayoutConfig::default(),
            timeline: TimelineConfig::default(),
            physics: PhysicsConfig::default(),
            flash: FlashConfig::default(),
            palette: Palette::default(),
        }
    }
}

/// Limits applied by the line wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Maximum characters per display line.
    pub max_line_length: usize,
    /// Maximum number of display lines.
    pub max_lines: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_line_length: 8,
            max_lines: 3,
        }
    }
}

/// Weights of the diagonal wipe: `warmup = round(diff*d + column*n + line*l)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimelineConfig {
    /// Weight of the half-difference to the longest line.
    pub diff_weight: f64,
    /// Weight of the column index.
    pub column_weight: f64,
    /// Weight of the line index.
    pub line_weight: f64,
    /// Vertical gap between stacked lines, in pixels.
    pub line_gap_px: f64,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            diff_weight: 3.0,
            column_weight: 3.0,
            line_weight: 4.0,
            line_gap_px: 4.0,
        }
    }
}

/// Constants of the falling-in bounce.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PhysicsConfig {
    /// Velocity a letter starts with (negative is upwards on screen).
    pub initial_velocity: f64,
    /// Added to the velocity every frame.
    pub gravity: f64,
    /// Velocity multiplier applied after gravity.
    pub damping: f64,
    /// Fraction of velocity kept (and reflected) on a bounce.
    pub restitution: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            initial_velocity: -7.0,
            gravity: 0.4,
            damping: 0.98,
            restitution: 0.4,
        }
    }
}

/// Strobe timing: dim while the counter is below `flip`, bright until `cycle`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FlashConfig {
    /// Frames per full dim+bright cycle.
    pub cycle: u32,
    /// Counter value at which the bright variant takes over.
    pub flip: u32,
}

impl Default for FlashConfig {
    fn default() -> Self {
        Self { cycle: 6, flip: 3 }
    }
}

/// Colours used by the glyph atlas, the off-screen buffer and the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Palette {
    /// Window fill behind the effect.
    pub background: Rgb8,
    /// Ink colour of the glyph sheet.
    pub dim: Rgb8,
    /// Replacement ink for the bright variant.
    pub bright: Rgb8,
    /// Colour key marking transparent pixels in the sheet and the off-screen buffer.
    pub transparent: Rgb8,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb8::new(0x63, 0x50, 0x45),
            dim: Rgb8::new(0xdf, 0xbb, 0x35),
            bright: Rgb8::new(0xf8, 0xea, 0xe5),
            transparent: Rgb8::new(0xff, 0x00, 0xff),
        }
    }
}

impl EffectConfig {
    /// Parse a JSON config and validate it.
    pub fn from_json_str(json: &str) -> LevelupResult<Self> {
        let cfg: Self = serde_json::from_str(json)
            .map_err(|e| LevelupError::serde(format!("parse effect config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read a JSON config from disk and validate it.
    pub fn from_path(path: &Path) -> LevelupResult<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read effect config '{}'", path.display()))?;
        Self::from_json_str(&json)
    }

    /// Reject configurations the engine cannot run with.
    pub fn validate(&self) -> LevelupResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(LevelupError::validation(
                "canvas width/height must be non-zero",
            ));
        }
        if self.fps == 0 {
            return Err(LevelupError::validation("fps must be non-zero"));
        }
        if self.layout.max_lines == 0 {
            return Err(LevelupError::validation("layout.max_lines must be >= 1"));
        }
        if self.layout.max_line_length < 4 {
            return Err(LevelupError::validation(
                "layout.max_line_length must be >= 4 to fit an ellipsis",
            ));
        }
        if self.flash.cycle == 0 {
            return Err(LevelupError::validation("flash.cycle must be non-zero"));
        }
        if self.flash.flip > self.flash.cycle {
            return Err(LevelupError::validation(
                "flash.flip must be <= flash.cycle",
            ));
        }
        let t = &self.timeline;
        for (name, v) in [
            ("timeline.diff_weight", t.diff_weight),
            ("timeline.column_weight", t.column_weight),
            ("timeline.line_weight", t.line_weight),
            ("timeline.line_gap_px", t.line_gap_px),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(LevelupError::validation(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        let p = &self.physics;
        for (name, v) in [
            ("physics.initial_velocity", p.initial_velocity),
            ("physics.gravity", p.gravity),
            ("physics.damping", p.damping),
            ("physics.restitution", p.restitution),
        ] {
            if !v.is_finite() {
                return Err(LevelupError::validation(format!("{name} must be finite")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
