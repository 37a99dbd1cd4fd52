//! Zero-knowledge proof that a private vector is orthogonal to a public one,
//! built on the `groth16` crate.

pub mod circuit;
pub mod config;
pub mod pipeline;
pub mod types;
pub mod utils;

pub use circuit::{demo_public_input, demo_secret_input, InnerProductCircuit};
pub use config::DemoConfig;
pub use pipeline::{run, Outcome};
pub use types::{Error, Result};
