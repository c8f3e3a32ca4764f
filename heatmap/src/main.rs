use std::{path::PathBuf, process::ExitCode, time::Duration};

use clap::Parser;
use colorbrewer::Scheme;
use heatmap::{
    source::DEFAULT_URL, ChartSettings, Error, FileSource, Format, HttpSource, OutputSettings,
};

/// Render a heat map of monthly global land-surface temperature.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// URL of the dataset.
    #[arg(long, default_value = DEFAULT_URL)]
    url: String,

    /// Read the dataset from a local file instead of fetching it.
    #[arg(long, conflicts_with = "url")]
    input: Option<PathBuf>,

    /// Where to write the map.
    #[arg(short, long, default_value = "heatmap.svg")]
    output: PathBuf,

    /// svg, html or png. Guessed from the output's extension if not set.
    #[arg(short, long)]
    format: Option<Format>,

    /// ColorBrewer scheme for the cells.
    #[arg(long, default_value_t = Scheme::RdYlBu)]
    scheme: Scheme,

    /// Number of color classes.
    #[arg(long, default_value_t = 11)]
    classes: usize,

    /// Label every year divisible by this.
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(i32).range(1..))]
    year_every: i32,

    /// Pixel scale for PNG output.
    #[arg(long, default_value_t = 1)]
    scale: u32,

    /// Seconds to wait for the dataset.
    #[arg(long, default_value_t = 30)]
    timeout: u64,
}

fn run(args: Args) -> Result<(), Error> {
    let format = match args.format {
        Some(f) => f,
        None => Format::from_path(&args.output)
            .ok_or_else(|| Error::UnknownFormat(args.output.display().to_string()))?,
    };

    let mut settings = ChartSettings::default();
    settings.scheme = args.scheme;
    settings.classes = args.classes;
    settings.year_tick_every = args.year_every;
    let output = OutputSettings { scale: args.scale };

    match args.input {
        Some(path) => {
            let mut source = FileSource::new(path);
            heatmap::run(&mut source, &settings, format, &output, &args.output)?;
        }
        None => {
            let mut source = HttpSource::new(args.url, Duration::from_secs(args.timeout))?;
            heatmap::run(&mut source, &settings, format, &output, &args.output)?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let output = args.output.clone();
    match run(args) {
        Ok(()) => {
            tracing::info!("heat map in {}", output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("could not render heat map: {}", e);
            ExitCode::FAILURE
        }
    }
}
