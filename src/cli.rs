//! CLI interface for scriptboard.
//!
//! With no subcommand the interactive board opens. The other subcommands are
//! non-interactive: arguments in, one line of output out, so the formatters
//! can be used from scripts.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::locale::Locale;
use crate::model::BlockKind;
use crate::{reading, timecode};

/// Scriptboard — assemble a production script from blocks.
#[derive(Debug, Parser)]
#[command(name = "scriptboard", version, after_long_help = KEYS_HELP)]
pub struct Cli {
    /// Display language. Overrides `SCRIPTBOARD_LOCALE` and the config file.
    #[arg(long, global = true, value_enum)]
    pub locale: Option<LocaleArg>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

const KEYS_HELP: &str = r"Board keys:
  ↑↓ / j k   select block
  a          add block (pick a kind, ⏎ to add)
  e / ⏎      edit selected block
  d          delete selected block
  space      grab selected block; move with ↑↓, space again to drop
  q          quit

While editing:
  tab        next field (interview)
  ctrl-s     save
  esc        discard changes";

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Open the interactive board (the default).
    Board,

    /// Normalize a timecode to `HH:MM:SS,mmm`.
    ///
    /// Non-digits are dropped and the first nine digits fill the fields
    /// left to right.
    Timecode {
        /// Raw input, e.g. `0130` or `01:30:15.5`.
        raw: String,
    },

    /// Estimate reading time at 200 words per minute.
    ///
    /// Reads TEXT, or `--file`, or stdin when neither is given.
    ReadingTime {
        /// Text to measure.
        #[arg(conflicts_with = "file")]
        text: Option<String>,

        /// Read the text from this file.
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// List block kinds and their labels.
    Kinds,
}

/// Display language accepted on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LocaleArg {
    En,
    Th,
}

impl LocaleArg {
    pub fn to_domain(self) -> Locale {
        match self {
            Self::En => Locale::En,
            Self::Th => Locale::Th,
        }
    }
}

/// Run a one-shot subcommand, returning an error message on failure.
pub fn run(command: Command, locale: Locale) -> Result<(), String> {
    match command {
        Command::Board => Err("the board is interactive; run without a subcommand".to_string()),
        Command::Timecode { raw } => {
            println!("{}", timecode::format(&raw));
            Ok(())
        }
        Command::ReadingTime { text, file } => cmd_reading_time(text, file, locale),
        Command::Kinds => {
            for kind in BlockKind::ALL {
                println!("{kind:<10} {}", kind.label(locale));
            }
            Ok(())
        }
    }
}

fn cmd_reading_time(
    text: Option<String>,
    file: Option<PathBuf>,
    locale: Locale,
) -> Result<(), String> {
    let text = match (text, file) {
        (Some(text), _) => text,
        (None, Some(path)) => fs::read_to_string(&path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?,
        (None, None) => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| format!("failed to read stdin: {e}"))?;
            buf
        }
    };

    let estimate = reading::estimate(text.as_str());
    tracing::debug!(words = estimate.words, "estimated reading time");
    println!("{}", estimate.summary(locale));
    Ok(())
}
