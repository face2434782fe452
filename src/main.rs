use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use nbody_simulation::{config, sim, NBodySystem, SimParams};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Total simulated time in seconds.
    #[arg(short, long, default_value_t = sim::DEFAULT_DURATION)]
    duration: f64,

    /// Integration step size in seconds.
    #[arg(short = 'D', long, default_value_t = sim::DEFAULT_DELTA)]
    delta: f64,

    /// Seconds of simulated time between position samples.
    #[arg(short, long, default_value_t = sim::DEFAULT_SAMPLE_RATE)]
    samplerate: f64,

    /// INI file describing the bodies.
    config: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if !(args.delta > 0.0) {
        bail!("delta must be positive, got {}", args.delta);
    }
    if !(args.samplerate > 0.0) {
        bail!("samplerate must be positive, got {}", args.samplerate);
    }
    if args.duration < 0.0 {
        bail!("duration must not be negative, got {}", args.duration);
    }

    let bodies = config::load_file(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    log::info!(
        "loaded {} bodies from {}",
        bodies.len(),
        args.config.display()
    );

    let params = SimParams {
        duration: args.duration,
        delta: args.delta,
        sample_rate: args.samplerate,
    };
    let mut system = NBodySystem::new(bodies);

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    sim::run_sim(&mut system, &params, &mut out)?;
    out.flush()?;

    Ok(())
}
