//! Command Line Interface (CLI) layer for LSPREP.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for preparing one or more scene
//! directories. It wires user-provided paths to the underlying library
//! functionality exposed via `lsprep::api`.
//!
//! If you are embedding LSPREP into another application, prefer using
//! the high-level `lsprep::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
