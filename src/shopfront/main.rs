//! # Shopfront CLI
//!
//! The binary is intentionally thin: argument parsing, context wiring and
//! rendering live in `cli/`, and this file only invokes `cli::run()` and
//! handles process termination.
//!
//! Everything from `api.rs` inward is UI agnostic, so the CLI owns all
//! user-facing concerns: logging setup, dispatch, error display and output.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
