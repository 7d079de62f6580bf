//! Writes every achievable barbell and trap bar weight, with the plates that make it.
//!
//! Logging goes to stderr. `RUST_LOG` overrides the level; `--verbose` turns on debug output.

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use gym_weights_rs::{
    bar_kind::BarKind,
    config::Config,
    gym::Gym,
    report::{self, ReportFormat},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// TOML file overriding the built-in plates, bars and limits.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long, default_value_t, value_parser = clap::value_parser!(ReportFormat))]
    format: ReportFormat,

    /// Directory the reports are written to.
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Only report these bars (b, t). Defaults to all of them.
    #[arg(short, long, value_parser = clap::value_parser!(BarKind))]
    bar: Vec<BarKind>,

    /// Print the reports instead of writing files.
    #[arg(long)]
    stdout: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if args.verbose {
            "gym_weights_rs=debug,gym_weights=debug"
        } else {
            "gym_weights_rs=info,gym_weights=info"
        })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Reading config {}", path.display()))?;
            Config::from_toml(&text).with_context(|| format!("Parsing config {}", path.display()))?
        }
        None => Config::default(),
    };
    let gym = Gym::new(config.validate().context("Invalid config")?);

    for kind in BarKind::selected(&args.bar) {
        let rows = gym.rows(kind);

        if args.stdout {
            report::write_section(&mut io::stdout().lock(), args.format, gym.bar(kind), &rows)?;
            continue;
        }

        let path = args
            .out_dir
            .join(format!("{}.{}", kind.report_stem(), args.format.extension()));
        let file = File::create(&path).with_context(|| format!("Creating {}", path.display()))?;
        let mut out = BufWriter::new(file);
        report::write_report(&mut out, args.format, gym.bar(kind), &rows)
            .and_then(|()| out.flush())
            .with_context(|| format!("Writing {}", path.display()))?;

        info!(%kind, rows = rows.len(), path = %path.display(), "wrote report");
    }

    Ok(())
}
