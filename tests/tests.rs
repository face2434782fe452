use nbody_simulation::body::{self, Body};
use nbody_simulation::{config, sim, NBodySystem, SimParams, Vector3};

/// Number of seconds in a day / a 365-day year.
const DAY: u64 = 60 * 60 * 24;
const YEAR: u64 = DAY * 365;

fn positions(system: &NBodySystem) -> Vec<Vector3> {
    system.bodies().iter().map(|b| b.position).collect()
}

// ==================================================================================
// Reference scenario: one Earth year around the Sun
// ==================================================================================

#[test]
fn earth_completes_one_orbit_in_a_year() {
    let mut system = NBodySystem::new(body::sun_earth());
    let start_x = system.bodies()[1].position.x;

    for _ in 0..YEAR {
        system.step(1.0);
    }

    let sun = &system.bodies()[0];
    let earth = &system.bodies()[1];

    // After ~one orbital period Earth should be back near its starting
    // x-coordinate, on the positive-x side of the orbit.
    let closure_error = (earth.position.x - start_x).abs() / start_x;
    assert!(
        closure_error < 0.05,
        "orbit failed to close: relative x error {}",
        closure_error
    );

    // The Sun barely moves compared to the orbital radius.
    let sun_drift = sun.position.magnitude();
    assert!(
        sun_drift < start_x * 1e-3,
        "sun drifted too far: {} m",
        sun_drift
    );
}

#[test]
fn sampling_cadence_over_a_simulated_week() {
    let mut system = NBodySystem::new(body::sun_earth());
    let params = SimParams {
        duration: 7.0 * DAY as f64,
        delta: 60.0,
        sample_rate: DAY as f64,
    };
    let mut out = Vec::new();
    sim::run_sim(&mut system, &params, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let markers: Vec<u64> = text
        .lines()
        .filter(|l| !l.is_empty())
        .map(|l| l.split(':').next().unwrap().parse().unwrap())
        .collect();

    // Two bodies per sample, markers 0 through 7, each repeated twice.
    assert_eq!(markers.len(), 16);
    for (i, pair) in markers.chunks(2).enumerate() {
        assert_eq!(pair, [i as u64, i as u64]);
    }
}

// ==================================================================================
// Config round trip
// ==================================================================================

const SOLAR_INI: &str = "\
; Sun/Earth reference scenario, masses pre-scaled by G
[sun]
M = 1.32712440018e20

[earth]
cx = 1.496e11
vy = 29722
M = 3.986004418e14
";

#[test]
fn configured_run_matches_builtin_scenario() {
    let configured = config::load_str(SOLAR_INI).unwrap();
    let builtin = body::sun_earth();

    let run = |bodies: Vec<Body>| {
        let mut system = NBodySystem::new(bodies);
        for _ in 0..DAY {
            system.step(1.0);
        }
        positions(&system)
    };

    assert_eq!(run(configured), run(builtin));
}

#[test]
fn config_file_loads_from_disk() {
    let path = std::env::temp_dir().join("nbody_simulation_test_planets.ini");
    std::fs::write(&path, SOLAR_INI).unwrap();

    let bodies = config::load_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(bodies.len(), 2);
    assert_eq!(bodies[0].name, "sun");
    assert_eq!(bodies[1].mass, 3.986004418e14);
}

// ==================================================================================
// Determinism
// ==================================================================================

#[test]
fn seeded_ring_runs_are_bit_identical() {
    let run = || {
        fastrand::seed(42);
        let mut system = NBodySystem::new(body::orbit_ring(300));
        for _ in 0..50 {
            system.step(1e-3);
        }
        positions(&system)
    };

    let first = run();
    let second = run();
    assert_eq!(first, second);
}
