#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Basic Usage Example for `csscolor_converter`
//!
//! This example demonstrates:
//! - Converting every literal of one notation in a stylesheet
//! - Confirming a conversion that drops the alpha channel
//! - Inspecting the detailed report for skipped literals
//! - Showing the advisory hints for a notation pair

use csscolor_converter::{
    ColorNotation, Confirmation, ConversionError, ConversionOptions, advisory, convert,
    convert_detailed, convert_with,
};

const STYLESHEET: &str = "\
.header { color: #3b5625; background: #fff; }
.overlay { background: rgba(59, 86, 37, 0.5); }
.accent { color: hsl(93, 39%, 24%); }
.broken { color: rgb(300, 0, 0); border-color: rgb(59, 86, 37); }
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("=== csscolor_converter - Basic Usage Example ===\n");
    println!("Input:\n{STYLESHEET}");

    // Step 1: hex to rgb with default options
    let options = ConversionOptions::default();
    let rgb = convert(STYLESHEET, ColorNotation::Hex, ColorNotation::Rgb, &options)?;
    println!("Step 1: hex -> rgb\n{rgb}");

    // Step 2: rgb to hsl, keeping two decimals
    let decimals = ConversionOptions::new(false, true);
    if let Some(hint) = advisory(ColorNotation::Rgb, ColorNotation::Hsl, &options) {
        println!("Step 2: hint without decimals: {hint}");
    }
    let hsl = convert(&rgb, ColorNotation::Rgb, ColorNotation::Hsl, &decimals)?;
    println!("Step 2: rgb -> hsl (decimals)\n{hsl}");

    // Step 3: rgba to hex drops the alpha channel and must be confirmed
    match convert(STYLESHEET, ColorNotation::Rgba, ColorNotation::Hex, &options) {
        Err(e @ ConversionError::AlphaLossConfirmationRequired { .. }) => {
            println!("Step 3: refused: {e}");
        }
        Ok(_) => println!("Step 3: unexpectedly converted without confirmation"),
    }
    let hex = convert_with(
        STYLESHEET,
        ColorNotation::Rgba,
        ColorNotation::Hex,
        &options,
        Confirmation::Granted,
    )?;
    println!("Step 3: rgba -> hex (confirmed)\n{hex}");

    // Step 4: percentages and the detailed report
    let conversion = convert_detailed(
        STYLESHEET,
        ColorNotation::Rgb,
        ColorNotation::Hex,
        &ConversionOptions::new(true, false),
        Confirmation::Required,
    )?;
    println!(
        "Step 4: rgb -> hex replaced {} literal(s), skipped {}",
        conversion.replaced,
        conversion.skipped.len()
    );
    for skipped in &conversion.skipped {
        println!("  '{}' at {:?}: {}", skipped.text, skipped.span, skipped.reason);
    }

    Ok(())
}
