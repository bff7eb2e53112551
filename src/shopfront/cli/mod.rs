//! # CLI Behavior
//!
//! This is **one possible UI client** for shopfront, not the application
//! itself. It is the only place that knows about terminal I/O, exit codes
//! and output formatting.
//!
//! For the overall architecture, see the crate-level documentation of the
//! `shopfront` library.
//!
//! ## Naked Execution (`shopfront`)
//!
//! Running `shopfront` with no arguments lists the catalog, the same as
//! `shopfront list`.
//!
//! ## Data Location
//!
//! The cart (`cart.json`) and the configuration (`config.json`) live in
//! `$SHOPFRONT_HOME` when it is set, otherwise in the OS data directory.
//! The catalog is read from `--catalog`, falling back to the `catalog`
//! config key (`products.json` in the working directory by default).
//!
//! ## Logging
//!
//! Diagnostics go to stderr through `tracing`. `RUST_LOG` controls the
//! filter; `--verbose` raises the default from `warn` to `debug`.

mod commands;
mod render;
mod setup;

pub use commands::run;
