use std::{fs::File, io::BufReader, path::PathBuf};

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use boxblur::{BlurMode, BlurOpts};

/// Blur an image with a fast Gaussian approximation.
#[derive(Parser, Debug)]
#[command(name = "boxblur", version)]
struct Cli {
    /// Input image (any format the `image` crate decodes).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output image; the format follows the extension.
    #[arg(long)]
    out: PathBuf,

    /// Gaussian standard deviation in pixels. Overrides the config file.
    #[arg(long)]
    radius: Option<u32>,

    /// Buffer handling. Overrides the config file.
    #[arg(long, value_enum)]
    mode: Option<BlurMode>,

    /// JSON file with `radius` and `mode`.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let opts = resolve_opts(&cli)?;

    let mut img = image::open(&cli.in_path)
        .with_context(|| format!("decode image '{}'", cli.in_path.display()))?;
    let blurred = opts.apply(&mut img);

    if let Some(parent) = cli.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    blurred
        .save(&cli.out)
        .with_context(|| format!("write image '{}'", cli.out.display()))?;

    eprintln!("wrote {}", cli.out.display());
    Ok(())
}

fn resolve_opts(cli: &Cli) -> anyhow::Result<BlurOpts> {
    let mut opts = match &cli.config {
        Some(path) => {
            let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
            BlurOpts::from_json_reader(BufReader::new(f))?
        }
        None => BlurOpts::default(),
    };
    if let Some(radius) = cli.radius {
        opts.radius = radius;
    }
    if let Some(mode) = cli.mode {
        opts.mode = mode;
    }
    tracing::debug!(?opts, "resolved blur options");
    Ok(opts)
}
