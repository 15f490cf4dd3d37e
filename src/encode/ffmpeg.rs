use std::{
    io::Write as _,
    path::{Path, PathBuf},
    process::{Child, ChildStdin, Command, Stdio},
};

use anyhow::Context as _;

use crate::{
    foundation::error::{LevelupError, LevelupResult},
    render::frame::FrameRGBA,
};

/// Output settings for [`FfmpegEncoder`].
#[derive(Clone, Debug)]
pub struct EncodeConfig {
    /// Frame width in pixels (even).
    pub width: u32,
    /// Frame height in pixels (even).
    pub height: u32,
    /// Output frame rate.
    pub fps: u32,
    /// Destination file.
    pub out_path: PathBuf,
    /// Replace an existing destination file.
    pub overwrite: bool,
}

impl EncodeConfig {
    /// Reject sizes and rates `libx264`/`yuv420p` cannot take.
    pub fn validate(&self) -> LevelupResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(LevelupError::validation(
                "encode width/height must be non-zero",
            ));
        }
        if self.fps == 0 {
            return Err(LevelupError::validation("encode fps must be non-zero"));
        }
        if !self.width.is_multiple_of(2) || !self.height.is_multiple_of(2) {
            return Err(LevelupError::validation(
                "encode width/height must be even (required for yuv420p mp4 output)",
            ));
        }
        Ok(())
    }
}

/// MP4 settings for a `width`x`height` stream at `fps`, overwriting `out_path`.
pub fn default_mp4_config(
    out_path: impl Into<PathBuf>,
    width: u32,
    height: u32,
    fps: u32,
) -> EncodeConfig {
    EncodeConfig {
        width,
        height,
        fps,
        out_path: out_path.into(),
        overwrite: true,
    }
}

/// Whether an `ffmpeg` binary can be run from `PATH`.
pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent_dir(path: &Path) -> LevelupResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Streams opaque RGBA8 frames into a system `ffmpeg` process.
pub struct FfmpegEncoder {
    cfg: EncodeConfig,
    child: Child,
    stdin: Option<ChildStdin>,
    frames: u64,
}

impl FfmpegEncoder {
    /// Validate `cfg` and spawn `ffmpeg` reading raw frames from stdin.
    #[tracing::instrument(skip_all, fields(out = %cfg.out_path.display()))]
    pub fn new(cfg: EncodeConfig) -> LevelupResult<Self> {
        cfg.validate()?;
        ensure_parent_dir(&cfg.out_path)?;

        if !cfg.overwrite && cfg.out_path.exists() {
            return Err(LevelupError::validation(format!(
                "output file '{}' already exists",
                cfg.out_path.display()
            )));
        }

        if !is_ffmpeg_on_path() {
            return Err(LevelupError::encode(
                "ffmpeg is required for MP4 encoding, but was not found on PATH",
            ));
        }

        let mut cmd = Command::new("ffmpeg");
        cmd.stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());
        cmd.arg(if cfg.overwrite { "-y" } else { "-n" });
        cmd.args([
            "-loglevel",
            "error",
            "-f",
            "rawvideo",
            "-pix_fmt",
            "rgba",
            "-s",
            &format!("{}x{}", cfg.width, cfg.height),
            "-r",
            &cfg.fps.to_string(),
            "-i",
            "pipe:0",
            "-an",
            "-c:v",
            "libx264",
            "-pix_fmt",
            "yuv420p",
            "-movflags",
            "+faststart",
        ])
        .arg(&cfg.out_path);

        let mut child = cmd.spawn().map_err(|e| {
            LevelupError::encode(format!(
                "failed to spawn ffmpeg (is it installed and on PATH?): {e}"
            ))
        })?;
        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| LevelupError::encode("failed to open ffmpeg stdin"))?;

        tracing::debug!(width = cfg.width, height = cfg.height, fps = cfg.fps, "ffmpeg spawned");
        Ok(Self {
            cfg,
            child,
            stdin: Some(stdin),
            frames: 0,
        })
    }

    /// Write one frame; it must match the configured size.
    pub fn encode_frame(&mut self, frame: &FrameRGBA) -> LevelupResult<()> {
        if frame.width != self.cfg.width || frame.height != self.cfg.height {
            return Err(LevelupError::validation(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width, frame.height, self.cfg.width, self.cfg.height
            )));
        }
        let Some(stdin) = self.stdin.as_mut() else {
            return Err(LevelupError::encode("ffmpeg encoder is already finalized"));
        };
        stdin.write_all(&frame.data).map_err(|e| {
            LevelupError::encode(format!("failed to write frame to ffmpeg stdin: {e}"))
        })?;
        self.frames += 1;
        Ok(())
    }

    /// Close stdin and wait for `ffmpeg`; returns the number of frames written.
    pub fn finish(mut self) -> LevelupResult<u64> {
        drop(self.stdin.take());

        let output = self.child.wait_with_output().map_err(|e| {
            LevelupError::encode(format!("failed to wait for ffmpeg to finish: {e}"))
        })?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(LevelupError::encode(format!(
                "ffmpeg exited with status {}: {}",
                output.status,
                stderr.trim()
            )));
        }
        Ok(self.frames)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
