//! Loopforge renders looping, shader-driven animated emblems from short
//! natural-language prompts.
//!
//! # Pipeline overview
//!
//! 1. **Map**: `prompt -> StyleParams` via an ordered keyword rule table
//!    ([`PromptMapper`]), or any other [`StyleProvider`] implementation.
//! 2. **Ease**: a live loop trails the active style with a per-frame
//!    low-pass filter ([`StyleSmoother`]), so new prompts morph in.
//! 3. **Shade**: a fixed analytic function turns the eased style, loop phase
//!    and cursor into pixels ([`shade`], [`CpuRenderer`]).
//! 4. **Export**: PNG stills via the `image` crate, looping MP4s by
//!    streaming frames to the system `ffmpeg` binary.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: mapping and shading are pure; the same
//!   prompt, phase and cursor always produce the same pixels.
//! - **One mutable record**: the active style is written only on prompt
//!   submission and read-and-eased by the render loop; both happen on the
//!   caller's thread ([`LoopSession`]).
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod animation;
mod encode;
mod foundation;
mod render;
mod style;

pub use animation::smooth::{EasedStyle, SMOOTHING, StyleSmoother};
pub use encode::ffmpeg::{
    EncodeConfig, FfmpegEncoder, ensure_parent_dir, is_ffmpeg_on_path,
};
pub use encode::png::write_frame_png;
pub use foundation::core::{Canvas, Fps, LoopPhase, Vec2};
pub use foundation::error::{LoopforgeError, LoopforgeResult};
pub use render::cpu::{CpuRenderer, FrameRGBA};
pub use render::pipeline::{
    LoopRenderOpts, loop_frame_count, render_loop_frames, render_loop_to_mp4, render_still,
};
pub use render::session::LoopSession;
pub use render::shader::shade;
pub use style::model::{SYMMETRY_MAX, SYMMETRY_MIN, StyleOverrides, StyleParams};
pub use style::prompt::{PromptMapper, surprise_prompt};
pub use style::provider::{GeneratedStyleProvider, StyleProvider, TextCompletion};
