use std::path::PathBuf;

use loopforge::{
    Canvas, Fps, LoopRenderOpts, PromptMapper, StyleParams, Vec2, is_ffmpeg_on_path,
    loop_frame_count, render_loop_frames, render_loop_to_mp4,
};

#[test]
fn loop_frames_cover_exactly_one_period() {
    let mut style = StyleParams::default();
    style.duration = 0.5;
    let opts = LoopRenderOpts {
        fps: Fps::new(24, 1).unwrap(),
        ..LoopRenderOpts::default()
    };
    let canvas = Canvas {
        width: 16,
        height: 16,
    };

    assert_eq!(loop_frame_count(&style, opts.fps), 12);
    let frames = render_loop_frames(&style, canvas, &opts).unwrap();
    assert_eq!(frames.len(), 12);

    // Distinct phases must produce distinct pictures somewhere in the loop.
    assert!(frames.windows(2).any(|w| w[0].data != w[1].data));
}

#[test]
fn mp4_export_writes_a_file_when_ffmpeg_is_available() {
    if !is_ffmpeg_on_path() {
        eprintln!("skipping: ffmpeg not found on PATH");
        return;
    }

    let mut style = PromptMapper::new().map("high energy red sigil");
    style.duration = 0.2;

    let dir = PathBuf::from("target").join("export_loop");
    std::fs::create_dir_all(&dir).unwrap();
    let out_path = dir.join("loop.mp4");
    let _ = std::fs::remove_file(&out_path);

    let opts = LoopRenderOpts {
        fps: Fps::new(30, 1).unwrap(),
        cursor: Vec2::ZERO,
        overwrite: true,
    };
    render_loop_to_mp4(
        &style,
        Canvas {
            width: 64,
            height: 64,
        },
        &opts,
        out_path.clone(),
    )
    .unwrap();

    let meta = std::fs::metadata(&out_path).unwrap();
    assert!(meta.len() > 0);
}
