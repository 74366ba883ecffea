use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;
use motif_mark::{LaneStrategy, RunSettings, about, layout_files};
use motif_mark_render::export_layout_svg;
use std::{fs, path::PathBuf};

/// Find IUPAC motifs in FASTA sequences and draw them as stacked lanes.
#[derive(Parser, Debug)]
#[command(name = "motif_mark", version, long_version = about::LONG_VERSION)]
struct Cli {
    /// Input FASTA; uppercase runs are drawn as exons
    #[arg(short = 'f', long, value_name = "FILE")]
    fasta: PathBuf,

    /// Motif file, one motif per line
    #[arg(short = 'm', long, value_name = "FILE")]
    motifs: PathBuf,

    /// SVG output (default: FASTA path with .svg extension)
    #[arg(short = 'o', long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Also write the layout report as JSON
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// JSON settings file; flags below override it
    #[arg(long, value_name = "FILE")]
    settings: Option<String>,

    /// Canvas width in pixels
    #[arg(long)]
    width: Option<f32>,

    /// Lane strategy: active-count or first-free
    #[arg(long)]
    lanes: Option<LaneStrategy>,

    /// Do not draw the motif legend
    #[arg(long)]
    no_legend: bool,

    /// Lay out sequences on one thread
    #[arg(long)]
    sequential: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn load_settings(cli: &Cli) -> Result<RunSettings> {
    let mut settings = match &cli.settings {
        Some(path) => RunSettings::load_from_path(path)?,
        None => RunSettings::default(),
    };
    if let Some(width) = cli.width {
        settings.render.width = width;
    }
    if let Some(lanes) = cli.lanes {
        settings.lanes = lanes;
    }
    if cli.no_legend {
        settings.render.show_legend = false;
    }
    if cli.sequential {
        settings.parallel = false;
    }
    Ok(settings)
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let default_filter = if cli.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();
    info!("{}", about::version_cli_text().replace('\n', ", "));

    let settings = load_settings(&cli)?;
    let report = layout_files(&cli.fasta, &cli.motifs, &settings).with_context(|| {
        format!(
            "Could not lay out motifs from '{}' over '{}'",
            cli.motifs.display(),
            cli.fasta.display()
        )
    })?;

    if let Some(json_path) = &cli.json {
        let text = serde_json::to_string_pretty(&report)
            .context("Could not serialize layout report")?;
        fs::write(json_path, text)
            .with_context(|| format!("Could not write JSON report '{}'", json_path.display()))?;
        info!("Wrote layout report to '{}'", json_path.display());
    }

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| cli.fasta.with_extension("svg"));
    fs::write(&output, export_layout_svg(&report, &settings.render))
        .with_context(|| format!("Could not write SVG output '{}'", output.display()))?;
    info!(
        "Wrote {} sequences ({} lanes max) to '{}'",
        report.sequences.len(),
        report.max_lane_count(),
        output.display()
    );
    Ok(())
}
