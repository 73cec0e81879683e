//! CSS color literal converter command-line tool.
//!
//! # Usage
//!
//! ```text
//! csscolor [FILE] --from <NOTATION> --to <NOTATION> [OPTIONS]
//! ```
//!
//! # Examples
//!
//! Convert every hex color in a stylesheet to `rgb()`:
//! ```text
//! csscolor styles.css --from hex --to rgb --output styles.rgb.css
//! ```
//!
//! Convert `rgba()` colors piped through stdin to `hsl()`, dropping alpha:
//! ```text
//! cat styles.css | csscolor --from rgba --to hsl --decimals --yes
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use clap::Parser;
use csscolor_converter_cli::{Args, init_logging, run};

fn main() -> ExitCode {
    init_logging();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("main: {e:?}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
