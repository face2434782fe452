//! The run loop: fixed-step integration with periodic position samples.

use std::io::{self, Write};

use crate::engine::NBodySystem;

/// One Julian year in seconds.
pub const DEFAULT_DURATION: f64 = 60.0 * 60.0 * 24.0 * 365.256;
/// One second per step.
pub const DEFAULT_DELTA: f64 = 1.0;
/// One day between samples.
pub const DEFAULT_SAMPLE_RATE: f64 = 60.0 * 60.0 * 24.0;

/// Loop parameters, all in simulated seconds.
#[derive(Clone, Copy, Debug)]
pub struct SimParams {
    /// Total simulated time.
    pub duration: f64,
    /// Integration step size.
    pub delta: f64,
    /// Reporting interval.
    pub sample_rate: f64,
}

impl Default for SimParams {
    fn default() -> SimParams {
        SimParams {
            duration: DEFAULT_DURATION,
            delta: DEFAULT_DELTA,
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }
}

/// Step the system for `params.duration` seconds, writing a sample to `out`
/// every time `floor(elapsed / sample_rate)` changes.
///
/// Each sample is one line per body in configuration order,
/// `<marker>: <name> <x>/<y>/<z>`, followed by a blank line. The marker is
/// `floor(elapsed / sample_rate)` and increases by exactly 1 between
/// consecutive samples.
pub fn run_sim<W: Write>(
    system: &mut NBodySystem,
    params: &SimParams,
    out: &mut W,
) -> io::Result<()> {
    let steps = (params.duration / params.delta) as u64;
    let mut elapsed = 0.0;
    let mut last_marker = None;

    for _ in 0..steps {
        system.step(params.delta);
        elapsed += params.delta;

        let marker = (elapsed / params.sample_rate) as u64;
        if last_marker == Some(marker) {
            continue;
        }
        last_marker = Some(marker);

        for body in system.bodies() {
            writeln!(
                out,
                "{}: {} {:.6}/{:.6}/{:.6}",
                marker, body.name, body.position.x, body.position.y, body.position.z
            )?;
        }
        writeln!(out)?;
    }

    Ok(())
}
