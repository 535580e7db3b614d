use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, Command, Stdio};

use crate::foundation::core::Fps;
use crate::foundation::error::{LoopforgeError, LoopforgeResult};
use crate::render::cpu::FrameRGBA;

/// Configuration for MP4 output via the system `ffmpeg` binary.
#[derive(Clone, Debug)]
pub struct EncodeConfig {
    /// Frame width in pixels; must be even for yuv420p output.
    pub width: u32,
    /// Frame height in pixels; must be even for yuv420p output.
    pub height: u32,
    /// Output frame rate.
    pub fps: Fps,
    /// Output MP4 file path.
    pub out_path: PathBuf,
    /// Overwrite the output file if it already exists.
    pub overwrite: bool,
}

impl EncodeConfig {
    /// Validate encoder invariants without touching the filesystem.
    pub fn validate(&self) -> LoopforgeResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(LoopforgeError::validation(
                "encode width/height must be non-zero",
            ));
        }
        if !self.width.is_multiple_of(2) || !self.height.is_multiple_of(2) {
            return Err(LoopforgeError::validation(
                "encode width/height must be even (required for yuv420p mp4 output)",
            ));
        }
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(LoopforgeError::validation("encode fps must be non-zero"));
        }
        Ok(())
    }
}

/// Streams raw RGBA frames to a spawned `ffmpeg` process for MP4 encoding.
///
/// Frames are straight, opaque RGBA8; output is h264 + yuv420p with
/// `+faststart` for broad playback compatibility.
pub struct FfmpegEncoder {
    cfg: EncodeConfig,
    child: Option<Child>,
    stdin: Option<ChildStdin>,
    stderr_drain: Option<std::thread::JoinHandle<std::io::Result<Vec<u8>>>>,
    frames_pushed: u64,
}

impl FfmpegEncoder {
    /// Validate the config, check for `ffmpeg` on `PATH`, and spawn it.
    pub fn new(cfg: EncodeConfig) -> LoopforgeResult<Self> {
        cfg.validate()?;

        ensure_parent_dir(&cfg.out_path)?;
        if !cfg.overwrite && cfg.out_path.exists() {
            return Err(LoopforgeError::validation(format!(
                "output file '{}' already exists",
                cfg.out_path.display()
            )));
        }

        if !is_ffmpeg_on_path() {
            return Err(LoopforgeError::encode(
                "ffmpeg is required for MP4 encoding, but was not found on PATH",
            ));
        }

        let mut cmd = Command::new("ffmpeg");
        cmd.stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());

        if cfg.overwrite {
            cmd.arg("-y");
        } else {
            cmd.arg("-n");
        }

        // Input: raw opaque RGBA8 frames on stdin.
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
            &format!("{}/{}", cfg.fps.num, cfg.fps.den),
            "-i",
            "pipe:0",
        ]);

        // Output: h264 + yuv420p for broad compatibility.
        cmd.args([
            "-an",
            "-c:v",
            "libx264",
            "-pix_fmt",
            "yuv420p",
            "-movflags",
            "+faststart",
        ]);
        cmd.arg(&cfg.out_path);

        let mut child = cmd.spawn().map_err(|e| {
            LoopforgeError::encode(format!(
                "failed to spawn ffmpeg (is it installed and on PATH?): {e}"
            ))
        })?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| LoopforgeError::encode("failed to open ffmpeg stdin (unexpected)"))?;
        let mut stderr = child
            .stderr
            .take()
            .ok_or_else(|| LoopforgeError::encode("failed to open ffmpeg stderr (unexpected)"))?;
        let stderr_drain = std::thread::spawn(move || {
            let mut stderr_bytes = Vec::new();
            stderr.read_to_end(&mut stderr_bytes)?;
            Ok(stderr_bytes)
        });

        tracing::debug!(
            out = %cfg.out_path.display(),
            width = cfg.width,
            height = cfg.height,
            "spawned ffmpeg encoder"
        );

        Ok(Self {
            cfg,
            child: Some(child),
            stdin: Some(stdin),
            stderr_drain: Some(stderr_drain),
            frames_pushed: 0,
        })
    }

    /// Push the next frame in presentation order.
    pub fn encode_frame(&mut self, frame: &FrameRGBA) -> LoopforgeResult<()> {
        if frame.width != self.cfg.width || frame.height != self.cfg.height {
            return Err(LoopforgeError::validation(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width, frame.height, self.cfg.width, self.cfg.height
            )));
        }
        let expected = (self.cfg.width as usize) * (self.cfg.height as usize) * 4;
        if frame.data.len() != expected {
            return Err(LoopforgeError::validation(
                "frame.data size mismatch with width*height*4",
            ));
        }

        let Some(stdin) = self.stdin.as_mut() else {
            return Err(LoopforgeError::encode("ffmpeg encoder is already finished"));
        };

        use std::io::Write as _;
        stdin.write_all(&frame.data).map_err(|e| {
            LoopforgeError::encode(format!("failed to write frame to ffmpeg stdin: {e}"))
        })?;
        self.frames_pushed += 1;
        Ok(())
    }

    /// Close the stream and wait for `ffmpeg` to finish the file.
    pub fn finish(&mut self) -> LoopforgeResult<()> {
        drop(self.stdin.take());
        let mut child = self
            .child
            .take()
            .ok_or_else(|| LoopforgeError::encode("ffmpeg encoder not started"))?;

        let status = child.wait().map_err(|e| {
            LoopforgeError::encode(format!("failed to wait for ffmpeg to finish: {e}"))
        })?;
        let stderr_bytes = match self.stderr_drain.take() {
            Some(handle) => handle
                .join()
                .map_err(|_| LoopforgeError::encode("ffmpeg stderr drain thread panicked"))?
                .map_err(|e| LoopforgeError::encode(format!("ffmpeg stderr read failed: {e}")))?,
            None => Vec::new(),
        };

        if !status.success() {
            let stderr = String::from_utf8_lossy(&stderr_bytes);
            return Err(LoopforgeError::encode(format!(
                "ffmpeg exited with status {}: {}",
                status,
                stderr.trim()
            )));
        }

        tracing::debug!(frames = self.frames_pushed, "ffmpeg encode complete");
        Ok(())
    }
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> LoopforgeResult<()> {
    if let Some(parent) = path.parent() {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Return `true` when `ffmpeg` can be invoked from `PATH`.
pub fn is_ffmpeg_on_path() -> bool {
    std::process::Command::new("ffmpeg")
        .arg("-version")
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}
