//! Command Line Interface (CLI) layer for BIBSnet.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) that validates inputs, runs the
//! predictor, and turns the outcome into an exit status.
//!
//! If you are embedding BIBSnet into another application, prefer using
//! the high-level `bibsnet::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
