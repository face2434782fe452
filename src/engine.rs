//! The integration engine: brute-force pairwise gravity plus a
//! globally-synchronous explicit Euler step.

use rayon::prelude::*;

use crate::body::Body;
use crate::vector::Vector3;

/// Below this body count the staging pass runs serially; rayon's
/// per-task overhead dominates for small systems.
const PAR_BODY_THRESHOLD: usize = 256;

/// A fixed population of bodies plus a same-size scratch buffer.
///
/// `step` writes the next state into the scratch buffer against a consistent
/// snapshot of the current one, then commits it all at once by swapping the
/// buffers. Updating bodies in place one at a time would let later bodies see
/// earlier bodies' already-advanced positions and change the trajectory.
pub struct NBodySystem {
    bodies: Vec<Body>,
    next: Vec<Body>,
}

impl NBodySystem {
    /// Takes ownership of the initial body states. The scratch buffer is
    /// allocated here, once, not per step.
    pub fn new(bodies: Vec<Body>) -> NBodySystem {
        let next = bodies.clone();
        NBodySystem { bodies, next }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Read access to the current state, in configuration order.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Net gravitational acceleration on body `i` from every other body,
    /// using the current state.
    pub fn acceleration_of(&self, i: usize) -> Vector3 {
        acceleration(&self.bodies, i)
    }

    /// Advance the whole system by one explicit Euler step of `dt` seconds.
    ///
    /// Phase 1 stages every body's next position and velocity from the
    /// pre-step state; phase 2 swaps the staged buffer in. All N
    /// accelerations see the same snapshot regardless of evaluation order,
    /// so the staging pass can run in parallel without changing results.
    pub fn step(&mut self, dt: f64) {
        let bodies = &self.bodies;
        let next = &mut self.next;

        if bodies.len() >= PAR_BODY_THRESHOLD {
            next.par_iter_mut()
                .enumerate()
                .for_each(|(i, staged)| stage_body(bodies, i, dt, staged));
        } else {
            for (i, staged) in next.iter_mut().enumerate() {
                stage_body(bodies, i, dt, staged);
            }
        }

        std::mem::swap(&mut self.bodies, &mut self.next);
    }
}

fn stage_body(bodies: &[Body], i: usize, dt: f64, staged: &mut Body) {
    let a = acceleration(bodies, i);
    let b = &bodies[i];
    staged.position = b.position.add(b.velocity.scale(dt));
    staged.velocity = b.velocity.add(a.scale(dt));
}

/// a_i = sum over j != i of M_j * (r_j - r_i) / |r_j - r_i|^3.
///
/// Masses arrive pre-scaled by G, so no gravitational constant appears here.
/// A pair whose separation is within machine epsilon of zero contributes
/// nothing: the term is skipped outright rather than evaluated as 0/0. No
/// other guard exists; runaway magnitudes overflow to infinity and propagate.
fn acceleration(bodies: &[Body], i: usize) -> Vector3 {
    let mut a = Vector3::ZERO;

    for (j, other) in bodies.iter().enumerate() {
        if i == j {
            continue;
        }

        let r = other.position.sub(bodies[i].position);
        let rmod = r.magnitude();
        if rmod > f64::EPSILON {
            a = a.add(r.scale(other.mass / (rmod * rmod * rmod)));
        }
    }

    a
}
