//! Brute-force gravitational N-body simulation.
//!
//! The engine advances every body with a globally-synchronous explicit Euler
//! step over the O(N^2) pairwise acceleration sum. Bodies are loaded from an
//! INI file with masses pre-scaled by the gravitational constant; the run
//! loop emits position samples at a cadence independent of the step size.
//!
//! Known model limitations, inherited deliberately: explicit Euler
//! accumulates energy error over long runs, coincident bodies simply exert
//! no force on each other, and unstable configurations overflow to infinity
//! rather than erroring. A higher-order integrator could replace the
//! internals of [`engine::NBodySystem::step`] without touching its contract.

pub mod body;
pub mod config;
pub mod engine;
pub mod sim;
pub mod vector;

pub use body::Body;
pub use config::ConfigError;
pub use engine::NBodySystem;
pub use sim::SimParams;
pub use vector::Vector3;
