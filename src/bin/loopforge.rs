use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use loopforge::{
    Canvas, Fps, LoopPhase, LoopRenderOpts, PromptMapper, StyleParams, StyleProvider as _, Vec2,
    render_loop_to_mp4, render_still, surprise_prompt, write_frame_png,
};

#[derive(Parser, Debug)]
#[command(name = "loopforge", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Map a prompt to a style record and print it as JSON.
    Style(StyleArgs),
    /// Render a single still as a PNG.
    Frame(FrameArgs),
    /// Render one full loop as an MP4 (requires `ffmpeg` on PATH).
    Render(RenderArgs),
    /// Print a reproducible random prompt built from the fixed word lists.
    Surprise(SurpriseArgs),
}

#[derive(Parser, Debug)]
struct StyleArgs {
    /// Emblem description, e.g. "neon purple mandala with 12 fold symmetry".
    prompt: String,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Emblem description; omit when using --style-json.
    prompt: Option<String>,

    /// Read the style record from a JSON file instead of mapping a prompt.
    #[arg(long, conflicts_with = "prompt")]
    style_json: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Canvas size as WxH.
    #[arg(long, default_value = "1024x1024", value_parser = parse_size)]
    size: Canvas,

    /// Loop phase to snapshot, in [0, 1).
    #[arg(long, default_value_t = 0.0)]
    phase: f64,

    /// Cursor position as X,Y in [-1, 1].
    #[arg(long, default_value = "0,0", value_parser = parse_cursor)]
    cursor: Vec2,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Emblem description; omit when using --style-json.
    prompt: Option<String>,

    /// Read the style record from a JSON file instead of mapping a prompt.
    #[arg(long, conflicts_with = "prompt")]
    style_json: Option<PathBuf>,

    /// Output MP4 path.
    #[arg(long)]
    out: PathBuf,

    /// Canvas size as WxH; both must be even for MP4 output.
    #[arg(long, default_value = "720x720", value_parser = parse_size)]
    size: Canvas,

    /// Output frame rate.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Overwrite output if it already exists.
    #[arg(long, default_value_t = true)]
    overwrite: bool,

    /// Cursor position as X,Y in [-1, 1].
    #[arg(long, default_value = "0,0", value_parser = parse_cursor)]
    cursor: Vec2,
}

#[derive(Parser, Debug)]
struct SurpriseArgs {
    /// Seed for the prompt; defaults to one derived from the clock.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Style(args) => cmd_style(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
        Command::Surprise(args) => cmd_surprise(args),
    }
}

fn cmd_style(args: StyleArgs) -> anyhow::Result<()> {
    let style = PromptMapper::new().style_for_prompt(&args.prompt)?;
    println!("{}", serde_json::to_string_pretty(&style)?);
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let style = resolve_style(args.prompt.as_deref(), args.style_json.as_deref())?;
    let frame = render_still(
        &style,
        args.size,
        LoopPhase(args.phase.rem_euclid(1.0)),
        args.cursor,
    )?;
    write_frame_png(&frame, &args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let style = resolve_style(args.prompt.as_deref(), args.style_json.as_deref())?;
    let opts = LoopRenderOpts {
        fps: Fps::new(args.fps, 1)?,
        cursor: args.cursor,
        overwrite: args.overwrite,
    };
    render_loop_to_mp4(&style, args.size, &opts, args.out.clone())?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_surprise(args: SurpriseArgs) -> anyhow::Result<()> {
    let seed = args.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    });
    eprintln!("seed {seed}");
    println!("{}", surprise_prompt(seed));
    Ok(())
}

fn resolve_style(
    prompt: Option<&str>,
    style_json: Option<&std::path::Path>,
) -> anyhow::Result<StyleParams> {
    match (prompt, style_json) {
        (_, Some(path)) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("read style json '{}'", path.display()))?;
            let style: StyleParams = serde_json::from_str(&json)
                .with_context(|| format!("parse style json '{}'", path.display()))?;
            style.validate()?;
            Ok(style)
        }
        (Some(prompt), None) => Ok(PromptMapper::new().style_for_prompt(prompt)?),
        (None, None) => anyhow::bail!("either a prompt or --style-json is required"),
    }
}

fn parse_size(s: &str) -> Result<Canvas, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| "size must be WxH, e.g. 720x720".to_owned())?;
    let width = w.trim().parse::<u32>().map_err(|e| format!("width: {e}"))?;
    let height = h.trim().parse::<u32>().map_err(|e| format!("height: {e}"))?;
    Ok(Canvas { width, height })
}

fn parse_cursor(s: &str) -> Result<Vec2, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| "cursor must be X,Y, e.g. 0.2,-0.4".to_owned())?;
    let x = x.trim().parse::<f64>().map_err(|e| format!("x: {e}"))?;
    let y = y.trim().parse::<f64>().map_err(|e| format!("y: {e}"))?;
    if !(-1.0..=1.0).contains(&x) || !(-1.0..=1.0).contains(&y) {
        return Err("cursor components must be in [-1, 1]".to_owned());
    }
    Ok(Vec2::new(x, y))
}
