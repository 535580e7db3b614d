use std::path::Path;

use crate::encode::ffmpeg::ensure_parent_dir;
use crate::foundation::error::{LoopforgeError, LoopforgeResult};
use crate::render::cpu::FrameRGBA;

/// Write a rendered frame as a PNG still.
pub fn write_frame_png(frame: &FrameRGBA, path: &Path) -> LoopforgeResult<()> {
    ensure_parent_dir(path)?;
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| LoopforgeError::encode(format!("write png '{}': {e}", path.display())))
}
