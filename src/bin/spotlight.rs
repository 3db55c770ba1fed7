use std::{io::Write as _, path::PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "spotlight", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the frame at one progress value as JSON.
    Frame(FrameArgs),
    /// Print evenly spaced frames from progress 0 to 1, one JSON object per line.
    Sweep(SweepArgs),
    /// Simulate a jump in scroll position and print the scrubbed frames per tick.
    Scroll(ScrollArgs),
}

#[derive(Args, Debug)]
struct SceneArgs {
    /// Viewport width in pixels.
    #[arg(long, default_value_t = 1920.0)]
    width: f64,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 1080.0)]
    height: f64,

    /// Number of scattering elements.
    #[arg(long, default_value_t = 4)]
    elements: usize,

    /// Optional JSON config overriding the default constants.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Overall progress (not clamped).
    #[arg(long)]
    progress: f64,
}

#[derive(Args, Debug)]
struct SweepArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Number of intervals between progress 0 and 1.
    #[arg(long, default_value_t = 20)]
    steps: u32,
}

#[derive(Args, Debug)]
struct ScrollArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Scroll offset jumped to at t=0.
    #[arg(long)]
    to: f64,

    /// Scroll offset at which the section pins.
    #[arg(long, default_value_t = 0.0)]
    pin_start: f64,

    /// Ticks per second.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Simulated duration in seconds.
    #[arg(long, default_value_t = 1.5)]
    seconds: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Sweep(args) => cmd_sweep(args),
        Command::Scroll(args) => cmd_scroll(args),
    }
}

fn load_config(scene: &SceneArgs) -> anyhow::Result<spotlight::SpotlightConfig> {
    match &scene.config {
        Some(path) => Ok(spotlight::SpotlightConfig::from_path(path)?),
        None => Ok(spotlight::SpotlightConfig::default()),
    }
}

fn make_scheduler(scene: &SceneArgs) -> anyhow::Result<spotlight::Scheduler> {
    let cfg = load_config(scene)?;
    let viewport = spotlight::Viewport::new(scene.width, scene.height)?;
    Ok(spotlight::Scheduler::configure(cfg, viewport, scene.elements)?)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let scheduler = make_scheduler(&args.scene)?;
    let frame = scheduler.on_progress(args.progress);
    let json = serde_json::to_string_pretty(&frame).context("serialize frame")?;
    println!("{json}");
    Ok(())
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    let scheduler = make_scheduler(&args.scene)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for frame in spotlight::sample_sweep(&scheduler, args.steps) {
        serde_json::to_writer(&mut out, &frame).context("serialize frame")?;
        writeln!(out).context("write frame")?;
    }
    Ok(())
}

/// Discards applied transforms; the scroll command prints frames instead.
struct NullTarget;

impl spotlight::RenderTarget<usize> for NullTarget {
    fn apply(&mut self, _handle: &usize, _state: spotlight::TransformState) {}
}

fn cmd_scroll(args: ScrollArgs) -> anyhow::Result<()> {
    if args.fps == 0 {
        anyhow::bail!("--fps must be > 0");
    }
    let cfg = load_config(&args.scene)?;
    let viewport = spotlight::Viewport::new(args.scene.width, args.scene.height)?;

    let mut target = NullTarget;
    let mut spot = spotlight::Spotlight::new(cfg)?.with_pin_start(args.pin_start);
    spot.configure(
        viewport,
        (0..args.scene.elements).collect(),
        Some(args.scene.elements),
        &mut target,
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let dt = 1.0 / f64::from(args.fps);
    let ticks = (args.seconds.max(0.0) * f64::from(args.fps)).ceil() as u64;

    if let Some(frame) = spot.on_scroll(args.to, 0.0, &mut target) {
        serde_json::to_writer(&mut out, &frame).context("serialize frame")?;
        writeln!(out).context("write frame")?;
    }
    for i in 1..=ticks {
        let now = i as f64 * dt;
        let Some(frame) = spot.tick(now, &mut target) else {
            break;
        };
        serde_json::to_writer(&mut out, &frame).context("serialize frame")?;
        writeln!(out).context("write frame")?;
        if spot.is_settled(now) {
            break;
        }
    }
    Ok(())
}
