//! specrend - blackbody color temperature tables
//!
//! Prints the chromaticity and display RGB of a blackbody radiator over a
//! range of temperatures for one of the standard color systems.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use specrend_color::Renderer;
use specrend_color::primaries::{ColorSystem, STANDARD_SYSTEMS};
use specrend_color::transfer::TransferCurve;
use std::io::{self, BufWriter, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod table;

use table::{Format, Range};

#[derive(Parser)]
#[command(name = "specrend")]
#[command(author, version, about = "Blackbody color temperature reference tables")]
#[command(long_about = "
Renders blackbody radiators to CIE xyz chromaticity and display RGB.

RGB is desaturated into the gamut of the color system and normalized so the
largest component is 1. Rows marked (Approximation) were outside the gamut.

Examples:
  specrend                              # SMPTE, 1000 K to 10000 K by 500 K
  specrend --system rec709 --gamma      # Gamma corrected Rec.709 values
  specrend --from 2000 --to 3000 --step 100 --csv
  specrend --list                       # Show the available color systems
")]
struct Cli {
    /// Color system: NTSC, EBU, SMPTE, HDTV, CIE, Rec709
    #[arg(short, long, default_value = "SMPTE")]
    system: String,

    /// First temperature in Kelvin
    #[arg(long, default_value = "1000")]
    from: f64,

    /// Last temperature in Kelvin (inclusive)
    #[arg(long, default_value = "10000")]
    to: f64,

    /// Temperature increment in Kelvin
    #[arg(long, default_value = "500")]
    step: f64,

    /// Apply the color system's gamma correction
    #[arg(short, long)]
    gamma: bool,

    /// Comma separated output with a header row
    #[arg(long)]
    csv: bool,

    /// List the standard color systems and exit
    #[arg(short, long)]
    list: bool,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn list_systems(out: &mut impl Write) -> Result<()> {
    for cs in STANDARD_SYSTEMS {
        let gamma = match cs.transfer_curve() {
            TransferCurve::Rec709 => "Rec.709".to_string(),
            TransferCurve::Power(g) => format!("{g}"),
        };
        writeln!(
            out,
            "{:<12} white ({:.4}, {:.4})  gamma {}",
            cs.name, cs.white.x, cs.white.y, gamma
        )?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if cli.list {
        list_systems(&mut out)?;
        out.flush()?;
        return Ok(());
    }

    let system = ColorSystem::by_name(&cli.system)
        .context("Run with --list to see the available systems")?;
    let range = Range::new(cli.from, cli.to, cli.step)?;
    let renderer = Renderer::try_new(system)
        .context("Invalid color system")?
        .gamma_correct(cli.gamma);

    info!(system = system.name, from = cli.from, to = cli.to, step = cli.step, "Rendering");

    let format = if cli.csv { Format::Csv } else { Format::Table };
    let rows = table::write(&mut out, &renderer, range, format)?;
    out.flush().context("Failed to write output")?;

    debug!(rows, "Done");
    Ok(())
}
