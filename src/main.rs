//! # photo-group CLI
//!
//! Command-line interface for the photo grouper.
//!
//! ## Usage
//! ```bash
//! photo-group ~/Photos
//! photo-group ~/Photos --quiet --workers 8
//! ```

mod cli;

use std::process::ExitCode;

fn main() -> ExitCode {
    photo_grouper::init_tracing();

    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{} {}", console::style("error:").red().bold(), error);
            ExitCode::FAILURE
        }
    }
}
