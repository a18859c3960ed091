//! Support library for the runnerup CLI binary.
//!
//! Exposes the command and logging modules so doctests and integration tests
//! can drive the `solve` pipeline without spawning a subprocess.

pub mod cli;
pub mod logging;
