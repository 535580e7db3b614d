use std::path::PathBuf;

use crate::animation::smooth::EasedStyle;
use crate::encode::ffmpeg::{EncodeConfig, FfmpegEncoder};
use crate::foundation::core::{Canvas, Fps, LoopPhase, Vec2};
use crate::foundation::error::{LoopforgeError, LoopforgeResult};
use crate::render::cpu::{CpuRenderer, FrameRGBA};
use crate::style::model::StyleParams;

/// Options for offline loop export.
#[derive(Clone, Debug)]
pub struct LoopRenderOpts {
    /// Output frame rate.
    pub fps: Fps,
    /// Cursor position baked into every exported frame, `[-1, 1]²`.
    pub cursor: Vec2,
    /// Whether to overwrite an existing output file.
    pub overwrite: bool,
}

impl Default for LoopRenderOpts {
    fn default() -> Self {
        Self {
            fps: Fps { num: 60, den: 1 },
            cursor: Vec2::ZERO,
            overwrite: true,
        }
    }
}

/// Number of frames in one loop of `style` at `fps`.
pub fn loop_frame_count(style: &StyleParams, fps: Fps) -> u64 {
    fps.secs_to_frames_round(style.duration).max(1)
}

/// Render a single still of `style` at the given loop phase.
///
/// Stills render the fully-converged style: no morph is in flight when a
/// snapshot is taken.
pub fn render_still(
    style: &StyleParams,
    canvas: Canvas,
    phase: LoopPhase,
    cursor: Vec2,
) -> LoopforgeResult<FrameRGBA> {
    style.validate()?;
    let renderer = CpuRenderer::new(canvas)?;
    Ok(renderer.render(&EasedStyle::converged(style), phase, cursor))
}

/// Render one full loop of `style` and return the frames in order.
///
/// The loop phase advances by exactly `1/frame_count` per frame, so frame
/// `frame_count` would land back on frame 0: the sequence tiles seamlessly.
/// The style is rendered converged for the same reason: a morph in flight
/// would make the last frame disagree with the first.
pub fn render_loop_frames(
    style: &StyleParams,
    canvas: Canvas,
    opts: &LoopRenderOpts,
) -> LoopforgeResult<Vec<FrameRGBA>> {
    style.validate()?;
    let renderer = CpuRenderer::new(canvas)?;
    let eased = EasedStyle::converged(style);
    let count = loop_frame_count(style, opts.fps);

    let mut frames = Vec::with_capacity(count.min(4096) as usize);
    for i in 0..count {
        let phase = LoopPhase(i as f64 / count as f64);
        frames.push(renderer.render(&eased, phase, opts.cursor));
    }
    Ok(frames)
}

/// Render one full loop of `style` and stream it to an MP4 via `ffmpeg`.
#[tracing::instrument(skip_all, fields(out = %out_path.display()))]
pub fn render_loop_to_mp4(
    style: &StyleParams,
    canvas: Canvas,
    opts: &LoopRenderOpts,
    out_path: PathBuf,
) -> LoopforgeResult<()> {
    style.validate()?;
    let renderer = CpuRenderer::new(canvas)?;
    let eased = EasedStyle::converged(style);
    let count = loop_frame_count(style, opts.fps);
    if count > i32::MAX as u64 {
        return Err(LoopforgeError::validation(
            "loop frame count is implausibly large; check duration and fps",
        ));
    }

    let mut encoder = FfmpegEncoder::new(EncodeConfig {
        width: canvas.width,
        height: canvas.height,
        fps: opts.fps,
        out_path,
        overwrite: opts.overwrite,
    })?;

    tracing::info!(frames = count, duration_secs = style.duration, "encoding emblem loop");
    for i in 0..count {
        let phase = LoopPhase(i as f64 / count as f64);
        let frame = renderer.render(&eased, phase, opts.cursor);
        encoder.encode_frame(&frame)?;
    }
    encoder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loop_frame_count_rounds_and_floors_at_one() {
        let fps = Fps { num: 60, den: 1 };
        let mut style = StyleParams::default();
        assert_eq!(loop_frame_count(&style, fps), 360);

        style.duration = 0.001;
        assert_eq!(loop_frame_count(&style, fps), 1);
    }

    #[test]
    fn loop_frames_tile_seamlessly() {
        let mut style = StyleParams::default();
        style.duration = 0.1;
        let canvas = Canvas {
            width: 12,
            height: 12,
        };
        let opts = LoopRenderOpts {
            fps: Fps { num: 30, den: 1 },
            ..LoopRenderOpts::default()
        };
        let frames = render_loop_frames(&style, canvas, &opts).unwrap();
        assert_eq!(frames.len(), 3);

        // Phase 1.0 wraps to phase 0.0: re-rendering one step past the end
        // must reproduce the first frame.
        let wrapped = render_still(&style, canvas, LoopPhase(1.0_f64.rem_euclid(1.0)), Vec2::ZERO)
            .unwrap();
        assert_eq!(wrapped.data, frames[0].data);
    }

    #[test]
    fn still_render_rejects_invalid_style() {
        let mut style = StyleParams::default();
        style.symmetry = 99.0;
        let canvas = Canvas {
            width: 8,
            height: 8,
        };
        assert!(render_still(&style, canvas, LoopPhase(0.0), Vec2::ZERO).is_err());
    }
}
