use rayon::prelude::*;

use crate::animation::smooth::EasedStyle;
use crate::foundation::core::{Canvas, LoopPhase, Vec2};
use crate::foundation::error::LoopforgeResult;
use crate::render::shader::shade;

/// A rendered frame as straight, opaque RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major, alpha always 255.
    pub data: Vec<u8>,
}

/// CPU renderer: evaluates the emblem shader once per pixel.
///
/// Rows fan out across the rayon pool; the shader is stateless, so no
/// coordination is needed within a frame.
pub struct CpuRenderer {
    canvas: Canvas,
}

impl CpuRenderer {
    /// Create a renderer for the given canvas size.
    pub fn new(canvas: Canvas) -> LoopforgeResult<Self> {
        canvas.validate()?;
        Ok(Self { canvas })
    }

    /// Canvas this renderer draws to.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Render one frame for the given eased style, loop phase and cursor.
    pub fn render(&self, style: &EasedStyle, phase: LoopPhase, cursor: Vec2) -> FrameRGBA {
        let width = self.canvas.width as usize;
        let height = self.canvas.height as usize;
        let mut data = vec![0u8; width * height * 4];

        let inv_w = 1.0 / self.canvas.width as f64;
        let inv_h = 1.0 / self.canvas.height as f64;

        data.par_chunks_exact_mut(width * 4)
            .enumerate()
            .for_each(|(y, row)| {
                // Pixel centers; v flipped so the emblem is y-up.
                let v = 1.0 - (y as f64 + 0.5) * inv_h;
                for (x, px) in row.chunks_exact_mut(4).enumerate() {
                    let u = (x as f64 + 0.5) * inv_w;
                    let rgb = shade(style, Vec2::new(u, v), cursor, phase);
                    px[0] = to_u8(rgb[0]);
                    px[1] = to_u8(rgb[1]);
                    px[2] = to_u8(rgb[2]);
                    px[3] = 255;
                }
            });

        FrameRGBA {
            width: self.canvas.width,
            height: self.canvas.height,
            data,
        }
    }
}

fn to_u8(x: f64) -> u8 {
    (x.clamp(0.0, 1.0) * 255.0).round() as u8
}
