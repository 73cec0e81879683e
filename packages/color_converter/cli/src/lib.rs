#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! The `csscolor` command line tool.
//!
//! Reads a text from a file or stdin, converts every CSS color literal of one
//! notation into another, and writes the result to a file or stdout.

use std::{
    io::{BufRead, IsTerminal as _, Read as _, Write},
    path::{Path, PathBuf},
};

use clap::{Parser, builder::FalseyValueParser};
use csscolor_converter::{
    ColorFamily, ColorNotation, Confirmation, Conversion, ConversionError, ConversionOptions,
    advisory, convert_detailed,
};
use thiserror::Error;

/// Log filter used when neither `CSSCOLOR_LOG` nor `RUST_LOG` is set.
#[cfg(debug_assertions)]
pub const DEFAULT_LOG_FILTER: &str = "csscolor=debug";

/// Log filter used when neither `CSSCOLOR_LOG` nor `RUST_LOG` is set.
#[cfg(not(debug_assertions))]
pub const DEFAULT_LOG_FILTER: &str = "csscolor=info";

const CONFIRMATION_PROMPT: &str = "Warning!\n\
    You are about to lose the color alpha channel information.\n\
    Are you sure you want to proceed? [y/N] ";

/// Convert CSS color literals between hex, rgb, rgba, hsl and hsla notations
#[derive(Parser, Debug, Clone)]
#[command(name = "csscolor", version, about, long_about = None)]
pub struct Args {
    /// File to convert. Reads stdin when absent or `-`
    #[arg(index = 1)]
    pub file: Option<PathBuf>,

    /// Notation of the literals to convert
    #[arg(short, long, env = "CSSCOLOR_FROM", default_value_t = ColorNotation::Hex)]
    pub from: ColorNotation,

    /// Notation to convert the literals into
    #[arg(short, long, env = "CSSCOLOR_TO", default_value_t = ColorNotation::Rgb)]
    pub to: ColorNotation,

    /// Render RGB channels as 0%-100% instead of 0-255
    #[arg(short, long, env = "CSSCOLOR_PERCENT", value_parser = FalseyValueParser::new())]
    pub percent: bool,

    /// Keep two decimals in HSL and percentage output
    #[arg(short, long, env = "CSSCOLOR_DECIMALS", value_parser = FalseyValueParser::new())]
    pub decimals: bool,

    /// Turn on decimals whenever the target is hsl or hsla
    #[arg(long, env = "CSSCOLOR_HSL_DECIMALS", value_parser = FalseyValueParser::new())]
    pub hsl_decimals: bool,

    /// Convert even if the alpha channel is lost
    #[arg(short, long)]
    pub yes: bool,

    /// File to write the result to. Writes stdout when absent
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Args {
    #[must_use]
    pub fn options(&self) -> ConversionOptions {
        let use_decimals =
            self.decimals || (self.hsl_decimals && self.to.family() == ColorFamily::Hsl);

        ConversionOptions::new(self.percent, use_decimals)
    }

    #[must_use]
    pub fn input(&self) -> Input {
        match &self.file {
            Some(path) if path.as_os_str() != "-" => Input::File(path.clone()),
            _ => Input::Stdin,
        }
    }
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("{0}. Pass --yes to convert anyway")]
    Conversion(#[from] ConversionError),
    #[error("Conversion cancelled")]
    Cancelled,
}

/// Where the text to convert comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// # Errors
    ///
    /// * If the file or stdin cannot be read as UTF-8 text
    pub fn read(&self) -> Result<String, CliError> {
        match self {
            Self::Stdin => {
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text)?;
                Ok(text)
            }
            Self::File(path) => std::fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.clone(),
                source,
            }),
        }
    }
}

/// Asks whether the alpha channel may be dropped. Only an answer of `y` or
/// `yes` grants the conversion.
///
/// # Errors
///
/// * If writing the prompt or reading the answer fails
pub fn prompt_confirmation<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
) -> std::io::Result<Confirmation> {
    output.write_all(CONFIRMATION_PROMPT.as_bytes())?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    Ok(match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Confirmation::Granted,
        _ => Confirmation::Required,
    })
}

/// Converts `text` with the notations and options from `args`.
///
/// When the alpha channel would be lost and `confirm` is given, it is asked
/// once and its answer decides whether to proceed.
///
/// # Errors
///
/// * `CliError::Conversion` - If the alpha channel would be lost and the
///   conversion was not confirmed up front
/// * `CliError::Cancelled` - If `confirm` declined
pub fn convert_text(
    text: &str,
    args: &Args,
    confirm: Option<&mut dyn FnMut() -> std::io::Result<Confirmation>>,
) -> Result<Conversion, CliError> {
    let options = args.options();
    let confirmation = if args.yes {
        Confirmation::Granted
    } else {
        Confirmation::Required
    };

    match convert_detailed(text, args.from, args.to, &options, confirmation) {
        Err(e @ ConversionError::AlphaLossConfirmationRequired { .. }) => {
            let Some(confirm) = confirm else {
                return Err(e.into());
            };

            match confirm()? {
                Confirmation::Granted => Ok(convert_detailed(
                    text,
                    args.from,
                    args.to,
                    &options,
                    Confirmation::Granted,
                )?),
                Confirmation::Required => Err(CliError::Cancelled),
            }
        }
        result => Ok(result?),
    }
}

fn write_output(path: Option<&Path>, text: &str) -> Result<(), CliError> {
    if let Some(path) = path {
        std::fs::write(path, text).map_err(|source| CliError::Write {
            path: path.to_path_buf(),
            source,
        })
    } else {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

/// Initializes `env_logger` from `CSSCOLOR_LOG`, then `RUST_LOG`, falling back
/// to [`DEFAULT_LOG_FILTER`].
pub fn init_logging() {
    let filter = std::env::var("CSSCOLOR_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

    env_logger::Builder::new().parse_filters(&filter).init();
}

/// Runs the tool with already parsed `args`.
///
/// # Errors
///
/// * If the input cannot be read or the output cannot be written
/// * If the alpha channel would be lost and the conversion was not confirmed
pub fn run(args: &Args) -> Result<(), CliError> {
    log::debug!("run: args={args:?}");

    if let Some(advisory) = advisory(args.from, args.to, &args.options()) {
        log::warn!("{advisory}");
    }

    let input = args.input();
    let text = input.read()?;

    let can_prompt = matches!(input, Input::File(_)) && std::io::stdin().is_terminal();
    let mut prompt = || prompt_confirmation(std::io::stdin().lock(), std::io::stderr());

    let conversion = convert_text(
        &text,
        args,
        if can_prompt {
            Some(&mut prompt)
        } else {
            None
        },
    )?;

    log::info!(
        "Converted {} {} literal(s) to {}",
        conversion.replaced,
        args.from,
        args.to
    );
    for skipped in &conversion.skipped {
        log::info!("Left '{}' unchanged: {}", skipped.text, skipped.reason);
    }

    write_output(args.output.as_deref(), &conversion.text)
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use csscolor_converter::{Hsl, Rgb, format::format_color};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    fn args(extra: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("csscolor").chain(extra.iter().copied())).unwrap()
    }

    #[test_log::test]
    fn defaults_convert_hex_to_rgb() {
        let args = args(&[]);

        assert_eq!(args.from, ColorNotation::Hex);
        assert_eq!(args.to, ColorNotation::Rgb);
        assert_eq!(args.options(), ConversionOptions::default());
        assert_eq!(args.input(), Input::Stdin);
    }

    #[test_log::test]
    fn notations_parse_case_insensitively() {
        let args = args(&["--from", "RGBA", "--to", "Hsla", "styles.css"]);

        assert_eq!(args.from, ColorNotation::Rgba);
        assert_eq!(args.to, ColorNotation::Hsla);
        assert_eq!(args.input(), Input::File(PathBuf::from("styles.css")));
    }

    #[test_log::test]
    fn unknown_notations_are_rejected() {
        assert!(Args::try_parse_from(["csscolor", "--from", "hsv"]).is_err());
    }

    #[test_log::test]
    fn dash_reads_stdin() {
        assert_eq!(args(&["-"]).input(), Input::Stdin);
    }

    #[test_log::test]
    fn flags_map_to_options() {
        assert_eq!(
            args(&["--percent", "--decimals"]).options(),
            ConversionOptions::new(true, true)
        );
    }

    #[test_log::test]
    fn hsl_decimals_only_apply_to_hsl_targets() {
        assert!(args(&["--hsl-decimals", "--to", "hsla"]).options().use_decimals);
        assert!(!args(&["--hsl-decimals", "--to", "rgb"]).options().use_decimals);
    }

    #[test_log::test]
    fn prompt_grants_only_on_yes() {
        let mut output = vec![];
        let answer = prompt_confirmation(Cursor::new("Yes\n"), &mut output).unwrap();

        assert_eq!(answer, Confirmation::Granted);
        assert_eq!(String::from_utf8(output).unwrap(), CONFIRMATION_PROMPT);

        for declined in ["n\n", "\n", "", "sure\n"] {
            assert_eq!(
                prompt_confirmation(Cursor::new(declined), std::io::sink()).unwrap(),
                Confirmation::Required
            );
        }
    }

    #[test_log::test]
    fn alpha_loss_without_prompt_fails_with_hint() {
        let args = args(&["--from", "rgba", "--to", "hex"]);
        let error = convert_text("rgba(1, 2, 3, 0.5)", &args, None).unwrap_err();

        assert!(matches!(error, CliError::Conversion(_)));
        assert!(error.to_string().ends_with("Pass --yes to convert anyway"));
    }

    #[test_log::test]
    fn alpha_loss_with_yes_converts() {
        let args = args(&["--from", "rgba", "--to", "hex", "--yes"]);
        let conversion = convert_text("rgba(1, 2, 3, 0.5)", &args, None).unwrap();

        assert_eq!(conversion.text, "#010203");
    }

    #[test_log::test]
    fn alpha_loss_follows_the_prompt_answer() {
        let args = args(&["--from", "hsla", "--to", "hsl"]);
        let text = "hsla(120, 100%, 50%, 0.5)";

        let mut granted = || -> std::io::Result<_> { Ok(Confirmation::Granted) };
        assert_eq!(
            convert_text(text, &args, Some(&mut granted)).unwrap().text,
            "hsl(120, 100%, 50%)"
        );

        let mut declined = || -> std::io::Result<_> { Ok(Confirmation::Required) };
        assert!(matches!(
            convert_text(text, &args, Some(&mut declined)),
            Err(CliError::Cancelled)
        ));
    }

    #[test_log::test]
    fn prompt_is_not_asked_without_alpha_loss() {
        let args = args(&["--to", "rgba"]);
        let mut asked = false;
        let mut confirm = || -> std::io::Result<_> {
            asked = true;
            Ok(Confirmation::Granted)
        };

        let conversion = convert_text("#fff", &args, Some(&mut confirm)).unwrap();

        assert_eq!(conversion.text, "rgba(255, 255, 255, 1)");
        assert!(!asked);
    }

    proptest! {
        #[test_log::test]
        fn hex_literals_always_convert(
            rgb in any::<Rgb>(),
            to in any::<ColorNotation>(),
            options in any::<ConversionOptions>(),
        ) {
            let hex = format_color(&rgb.into(), "1", ColorNotation::Hex, &options);
            let args = Args {
                to,
                percent: options.use_percent_range,
                decimals: options.use_decimals,
                ..args(&[])
            };

            let conversion = convert_text(&hex, &args, None).unwrap();

            prop_assert_eq!(conversion.replaced, usize::from(to != ColorNotation::Hex));
            prop_assert!(conversion.skipped.is_empty());
        }

        #[test_log::test]
        fn hsl_literals_always_convert(
            hsl in any::<Hsl>(),
            to in any::<ColorNotation>(),
            options in any::<ConversionOptions>(),
        ) {
            let literal = format_color(&hsl.into(), "1", ColorNotation::Hsl, &options);
            let args = Args {
                from: ColorNotation::Hsl,
                to,
                ..args(&[])
            };

            let conversion = convert_text(&literal, &args, None).unwrap();

            prop_assert_eq!(conversion.replaced, 1, "{}", literal);
            prop_assert!(conversion.skipped.is_empty());
        }
    }
}
