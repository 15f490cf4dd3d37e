use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing::Level;

use levelup::{
    DEFAULT_SHEET_SCALE, DEFAULT_TEXT, EffectConfig, FrameIndex, GlyphAtlas, GlyphSize,
    RenderOpts, RenderToMp4Opts, RevealText, SYNTAX_ERROR_MESSAGE,
};

#[derive(Parser, Debug)]
#[command(name = "levelup", version)]
struct Cli {
    /// Effect configuration JSON (defaults are used for missing fields).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log lifecycle events to stderr.
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render the whole reveal as an MP4 video (requires `ffmpeg` on PATH).
    Render(RenderArgs),
    /// Print the wrapped lines and per-letter warmups.
    Layout(LayoutArgs),
}

#[derive(Args, Debug)]
struct SheetArgs {
    /// Glyph sprite sheet: one row of 30 cells in `a-z . ! ' space` order.
    #[arg(long)]
    sheet: PathBuf,

    /// Integer upscale applied to the sheet.
    #[arg(long, default_value_t = DEFAULT_SHEET_SCALE)]
    scale: u32,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    sheet: SheetArgs,

    /// Text to reveal (lowercased before validation).
    #[arg(long, default_value = DEFAULT_TEXT)]
    text: String,

    /// Frame index (0-based, frame 0 is the first tick after the trigger).
    #[arg(long)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    sheet: SheetArgs,

    /// Text to reveal (lowercased before validation).
    #[arg(long, default_value = DEFAULT_TEXT)]
    text: String,

    /// Output MP4 path.
    #[arg(long)]
    out: PathBuf,

    /// Background-only frames appended after the text clears.
    #[arg(long, default_value_t = 0)]
    tail: u64,

    /// Stop after this many frames even if the text never clears.
    #[arg(long, default_value_t = RenderOpts::default().max_frames)]
    max_frames: u64,

    /// Fail instead of replacing an existing output file.
    #[arg(long, default_value_t = false)]
    no_overwrite: bool,
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Text to reveal (lowercased before validation).
    #[arg(long, default_value = DEFAULT_TEXT)]
    text: String,

    /// Glyph cell size in pixels, used for centring.
    #[arg(long, default_value_t = 8 * DEFAULT_SHEET_SCALE)]
    glyph_size: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => EffectConfig::from_path(path)?,
        None => EffectConfig::default(),
    };
    match cli.cmd {
        Command::Frame(args) => cmd_frame(&config, args),
        Command::Render(args) => cmd_render(&config, args),
        Command::Layout(args) => cmd_layout(&config, args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .try_init();
}

fn parse_text(text: &str) -> anyhow::Result<RevealText> {
    RevealText::from_user_input(text).map_err(|e| {
        tracing::debug!(error = %e, "rejected reveal text");
        anyhow::anyhow!(SYNTAX_ERROR_MESSAGE)
    })
}

fn load_atlas(config: &EffectConfig, args: &SheetArgs) -> anyhow::Result<GlyphAtlas> {
    GlyphAtlas::from_sheet_path(&args.sheet, &config.palette, args.scale)
        .with_context(|| format!("load glyph sheet '{}'", args.sheet.display()))
}

fn cmd_frame(config: &EffectConfig, args: FrameArgs) -> anyhow::Result<()> {
    let text = parse_text(&args.text)?;
    let atlas = load_atlas(config, &args.sheet)?;

    let frame = levelup::render_frame(&text, config, &atlas, FrameIndex(args.frame));
    frame.save_png(&args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(config: &EffectConfig, args: RenderArgs) -> anyhow::Result<()> {
    let text = parse_text(&args.text)?;
    let atlas = load_atlas(config, &args.sheet)?;

    let opts = RenderToMp4Opts {
        render: RenderOpts {
            tail_frames: args.tail,
            max_frames: args.max_frames,
        },
        overwrite: !args.no_overwrite,
    };
    let frames = levelup::render_to_mp4(&text, config, &atlas, &args.out, opts)?;

    eprintln!("wrote {} ({frames} frames)", args.out.display());
    Ok(())
}

fn cmd_layout(config: &EffectConfig, args: LayoutArgs) -> anyhow::Result<()> {
    let text = parse_text(&args.text)?;
    let lines = levelup::wrap_lines(&text, &config.layout);
    let glyph = GlyphSize {
        width: args.glyph_size,
        height: args.glyph_size,
    };
    let timeline = levelup::build_timeline(
        &lines,
        glyph,
        config.canvas,
        &config.timeline,
        &config.physics,
    );

    for (idx, line) in lines.iter().enumerate() {
        let warmups: Vec<String> = timeline
            .letters
            .iter()
            .filter(|l| l.line_index == idx)
            .map(|l| l.warmup_frames.to_string())
            .collect();
        println!("{line:?} warmups=[{}]", warmups.join(", "));
    }
    Ok(())
}
