// File: crates/candlebrush-demo/src/main.rs
// Summary: Demo fetches the stock snapshot (or reads a local file), builds the candlestick
//          option with moving averages and volume, and writes option.json plus index.html.

mod page;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use candlebrush_core::{ChartConfigBuilder, ChartDocument, ChartSettings};
use candlebrush_fetch::{load_document, DataSource, FetchConfig, FileSource, HttpSource};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "candlebrush-demo", about = "Candlestick chart option with moving averages and volume")]
struct Args {
    /// URL returning a JSON array of `[date, open, close, low, high, volume]` rows.
    #[arg(long, conflicts_with = "file")]
    url: Option<String>,

    /// Local .json or .csv snapshot instead of fetching.
    #[arg(long)]
    file: Option<PathBuf>,

    /// JSON settings file; missing keys keep their defaults.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Theme preset (echarts, dark, light, red-up, high-contrast).
    #[arg(long)]
    theme: Option<String>,

    /// Moving-average windows in days, e.g. 5,10,20,30.
    #[arg(long, value_delimiter = ',')]
    windows: Option<Vec<usize>>,

    /// Output directory.
    #[arg(long, default_value = "target/out")]
    out: PathBuf,

    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let settings = resolve_settings(&args)?;
    info!(windows = ?settings.ma_windows, theme = %settings.theme, "chart settings");

    let source = make_source(&args)?;
    info!(source = %source.describe(), "loading price data");

    let builder = ChartConfigBuilder::new(settings);
    let doc = load_document(source.as_ref(), &builder)
        .await
        .with_context(|| format!("could not build chart from {}", source.describe()))?;
    info!(
        days = doc.option.x_axis.first().map(|a| a.data.len()).unwrap_or(0),
        series = doc.option.series.len(),
        "chart option ready"
    );

    write_outputs(&doc, &builder.settings().series_name, &args.out)?;
    Ok(())
}

/// Defaults, then the settings file, then CLI flags.
fn resolve_settings(args: &Args) -> Result<ChartSettings> {
    let mut settings = match &args.settings {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading settings {}", path.display()))?;
            ChartSettings::from_json_str(&text).with_context(|| format!("parsing settings {}", path.display()))?
        }
        None => ChartSettings::default(),
    };
    if let Some(name) = &args.theme {
        settings = settings.with_theme(name.clone());
    }
    if let Some(windows) = &args.windows {
        settings = settings.with_windows(windows.clone());
    }
    settings.validate()?;
    Ok(settings)
}

fn make_source(args: &Args) -> Result<Box<dyn DataSource>> {
    if let Some(path) = &args.file {
        let source = FileSource::new(path).with_context(|| format!("opening {}", path.display()))?;
        return Ok(Box::new(source));
    }
    let mut config = FetchConfig::default().with_timeout(Duration::from_secs(args.timeout_secs));
    if let Some(url) = &args.url {
        config = config.with_url(url.clone());
    }
    Ok(Box::new(HttpSource::new(config)?))
}

fn write_outputs(doc: &ChartDocument, title: &str, out_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(out_dir).with_context(|| format!("creating {}", out_dir.display()))?;

    let json_path = out_dir.join("option.json");
    std::fs::write(&json_path, doc.to_json_pretty()?).with_context(|| format!("writing {}", json_path.display()))?;
    println!("Wrote {}", json_path.display());

    let html_path = out_dir.join("index.html");
    std::fs::write(&html_path, page::render(doc, title)?).with_context(|| format!("writing {}", html_path.display()))?;
    println!("Wrote {}", html_path.display());
    Ok(())
}
