//! # Pingscript Common
//!
//! Types shared by every crate of the workspace.
//!
//! * **[`address`]**: turning raw words into validated dotted-quad addresses.
//! * **[`config`]**: run-wide settings built by the CLI.
//! * **[`error`]**: error types returned by the pipeline.
//! * **[`log`]**: the `info!`, `success!`, `warn!` and `error!` macros.

pub mod address;
pub mod config;
pub mod error;
pub mod log;
