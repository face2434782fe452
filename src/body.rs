//! Body state and ready-made scenarios.

use crate::vector::Vector3;

/// One point mass. `mass` is supplied pre-scaled by the gravitational
/// constant (the engine never multiplies by G itself), so the value is
/// really `G * M` in SI units. The name is used only for reporting.
#[derive(Clone, Debug)]
pub struct Body {
    pub name: String,
    pub position: Vector3,
    pub velocity: Vector3,
    pub mass: f64,
}

impl Body {
    pub fn new(name: impl Into<String>, position: Vector3, velocity: Vector3, mass: f64) -> Body {
        Body {
            name: name.into(),
            position,
            velocity,
            mass,
        }
    }
}

/// The reference two-body scenario: the Sun at rest at the origin and the
/// Earth at 1 AU with its mean orbital speed. Masses are `G * M` values.
pub fn sun_earth() -> Vec<Body> {
    vec![
        Body::new("sun", Vector3::ZERO, Vector3::ZERO, 1.32712440018e20),
        Body::new(
            "earth",
            Vector3::new(1.496e11, 0.0, 0.0),
            Vector3::new(0.0, 29722.0, 0.0),
            3.986004418e14,
        ),
    ]
}

/// A central body with `n` light bodies scattered on randomized near-circular
/// orbits. Useful for benchmarking; call `fastrand::seed` first for
/// reproducible placement.
pub fn orbit_ring(n: usize) -> Vec<Body> {
    let mut bodies = Vec::with_capacity(n + 1);
    bodies.push(Body::new("center", Vector3::ZERO, Vector3::ZERO, 1.0));

    for i in 0..n {
        let d = 0.1 + (i as f64) * 5.0 / (n as f64);
        let v = f64::sqrt(1.0 / d);
        let theta = fastrand::f64() * std::f64::consts::TAU;
        bodies.push(Body::new(
            format!("ring{}", i),
            Vector3::new(d * f64::cos(theta), d * f64::sin(theta), 0.0),
            Vector3::new(-v * f64::sin(theta), v * f64::cos(theta), 0.0),
            1e-14,
        ));
    }
    bodies
}
