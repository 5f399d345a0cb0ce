use std::path::PathBuf;

use algebraic_glow::{
    Config, FfmpegSink, FfmpegSinkOpts, GenerateOpts, SweepOpts, Viewport, generate,
    render, render_height_sweep, save_png,
};
use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

const VIDEO_HEIGHT_WARNING: u32 = 15;
const IMAGE_HEIGHT_WARNING: u32 = 30;

#[derive(Parser, Debug)]
#[command(name = "algebraic-glow", version, about = "Render the algebraic numbers")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render every algebraic number up to a height into one PNG.
    Image(ImageArgs),
    /// Render a height sweep as an MP4 (requires `ffmpeg` on PATH).
    Video(VideoArgs),
}

#[derive(Args, Debug)]
struct ImageArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Output PNG path.
    #[arg(long, default_value = "algebraic_numbers.png")]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct VideoArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Output MP4 path.
    #[arg(long, default_value = "algebraic_numbers.mp4")]
    out: PathBuf,

    /// Frames per second (1-60).
    #[arg(long, default_value_t = 2)]
    fps: u32,

    /// Leave out the "Height: N" label.
    #[arg(long, default_value_t = false)]
    no_label: bool,
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// JSON config file; flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Largest polynomial height to include.
    #[arg(long)]
    max_height: Option<u32>,

    /// Output width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Output height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Root-finding worker threads (defaults to available parallelism).
    #[arg(long)]
    threads: Option<usize>,

    /// Base seed for the Newton starting points.
    #[arg(long)]
    seed: Option<u64>,

    /// Run enumeration and root finding on one thread.
    #[arg(long, default_value_t = false)]
    sequential: bool,

    /// Log at debug level.
    #[arg(long, short, default_value_t = false)]
    verbose: bool,

    /// Visible rectangle: x_min y_min x_max y_max.
    #[arg(allow_negative_numbers = true, value_name = "RECT")]
    rect: Vec<f64>,
}

impl CommonArgs {
    fn config(&self) -> anyhow::Result<Config> {
        let mut cfg = match &self.config {
            Some(path) => Config::from_path(path)?,
            None => Config::default(),
        };
        if let Some(h) = self.max_height {
            cfg.max_height = h;
        }
        if let Some(w) = self.width {
            cfg.canvas.width = w;
        }
        if let Some(h) = self.height {
            cfg.canvas.height = h;
        }
        match self.rect.as_slice() {
            [] => {}
            &[x_min, y_min, x_max, y_max] => {
                cfg.viewport = Viewport::new(x_min, y_min, x_max, y_max)?;
            }
            other => anyhow::bail!(
                "expected 0 or 4 viewport values (x_min y_min x_max y_max), got {}",
                other.len()
            ),
        }
        cfg.validate()?;
        Ok(cfg)
    }

    fn generate_opts(&self) -> GenerateOpts {
        GenerateOpts {
            parallel: !self.sequential,
            workers: self.threads,
            seed: self.seed,
            ..GenerateOpts::default()
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("algebraic_glow={default_level}")));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Image(args) => cmd_image(args),
        Command::Video(args) => cmd_video(args),
    }
}

fn cmd_image(args: ImageArgs) -> anyhow::Result<()> {
    init_logging(args.common.verbose);
    let cfg = args.common.config()?;
    let opts = args.common.generate_opts();
    opts.validate()?;
    if cfg.max_height > IMAGE_HEIGHT_WARNING {
        tracing::warn!(
            max_height = cfg.max_height,
            "heights above {IMAGE_HEIGHT_WARNING} can take a very long time"
        );
    }

    let generation = generate(cfg.max_height, &opts)?;
    let buf = render(&generation.points, &cfg);
    save_png(&buf, &args.out).with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} ({} polynomials, {} roots)",
        args.out.display(),
        generation.stats.polynomials,
        generation.stats.roots
    );
    Ok(())
}

fn cmd_video(args: VideoArgs) -> anyhow::Result<()> {
    init_logging(args.common.verbose);
    let cfg = args.common.config()?;
    let opts = args.common.generate_opts();
    let sweep = SweepOpts {
        fps: args.fps,
        label: !args.no_label,
    };
    opts.validate()?;
    sweep.validate()?;
    if cfg.max_height > VIDEO_HEIGHT_WARNING {
        tracing::warn!(
            max_height = cfg.max_height,
            "video sweeps above height {VIDEO_HEIGHT_WARNING} can take a very long time"
        );
    }

    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(args.out.clone()));
    let stats = render_height_sweep(&cfg, &sweep, &opts, &mut sink)
        .with_context(|| format!("render video '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} ({} frames, {} points)",
        args.out.display(),
        stats.frames,
        stats.points
    );
    Ok(())
}
