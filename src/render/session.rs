use crate::animation::smooth::StyleSmoother;
use crate::foundation::core::{Canvas, LoopPhase, Vec2};
use crate::foundation::error::LoopforgeResult;
use crate::render::cpu::{CpuRenderer, FrameRGBA};
use crate::style::model::StyleParams;

/// A live render loop over one canvas.
///
/// The session owns the single piece of mutable state in the system: the
/// active target style (written on prompt submission via [`set_target`]) and
/// the per-frame easing state that trails it. Everything runs on the caller's
/// thread, one [`advance`] per displayed frame; dropping the session tears
/// the loop down.
///
/// [`set_target`]: LoopSession::set_target
/// [`advance`]: LoopSession::advance
pub struct LoopSession {
    renderer: CpuRenderer,
    target: StyleParams,
    smoother: StyleSmoother,
}

impl LoopSession {
    /// Create a session rendering `initial` on `canvas`, with the easing
    /// state converged on it.
    pub fn new(canvas: Canvas, initial: StyleParams) -> LoopforgeResult<Self> {
        initial.validate()?;
        Ok(Self {
            renderer: CpuRenderer::new(canvas)?,
            smoother: StyleSmoother::new(&initial),
            target: initial,
        })
    }

    /// Swap in a new target style. The eased fields keep their current
    /// values, so the visible emblem morphs toward the new target instead of
    /// snapping.
    pub fn set_target(&mut self, style: StyleParams) -> LoopforgeResult<()> {
        style.validate()?;
        self.target = style;
        Ok(())
    }

    /// The currently active target style.
    pub fn target(&self) -> &StyleParams {
        &self.target
    }

    /// Render the next frame.
    ///
    /// `elapsed_secs` is wall-clock time since the loop started; the loop
    /// phase is recomputed from it modulo the target's duration, and the
    /// easing state advances one step.
    pub fn advance(&mut self, elapsed_secs: f64, cursor: Vec2) -> FrameRGBA {
        let phase = LoopPhase::from_elapsed(elapsed_secs, self.target.duration);
        let eased = self.smoother.step(&self.target);
        self.renderer.render(&eased, phase, cursor)
    }
}
