//! Command Line Interface (CLI) layer for roundel.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for the `border` and `favicons`
//! subcommands. With no flags each subcommand uses the stock asset paths
//! and styling.
//!
//! If you are embedding roundel into another application, prefer the
//! high-level `roundel::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
