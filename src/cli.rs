//! Command-line interface parser for the countdown tool.
//!
//! MIT License
//!
//! Copyright (c) 2026 66f94eae
//!
//! Permission is hereby granted, free of charge, to any person obtaining a copy
//! of this software and associated documentation files (the "Software"), to deal
//! in the Software without restriction, including without limitation the rights
//! to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
//! copies of the Software, and to permit persons to whom the Software is
//! furnished to do so, subject to the following conditions:
//!
//! The above copyright notice and this permission notice shall be included in all
//! copies or substantial portions of the Software.
//!
//! THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
//! IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
//! FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
//! AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
//! LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
//! OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
//! SOFTWARE.

use std::{fs::File, io::Read, path::PathBuf};

use chrono::NaiveDate;
use clap::{builder::TypedValueParser, Parser, Subcommand};

use crate::conf::Conf;
use crate::date;
use crate::metrics::Metric;

/// Help message for date arguments
const DATE_HELP: &str = "Date must be strict \"YYYY-MM-DD\" (e.g. 2025-06-02)";

/// Command-line interface structure
#[derive(Parser)]
#[command(
    version(env!("CARGO_PKG_VERSION")),
    author(env!("CARGO_PKG_AUTHORS")),
    about(env!("CARGO_PKG_DESCRIPTION")),
    long_about = "Countdown tool that tracks the working days, hours and weeks \
                 left between two dates, after subtracting weekends, observed \
                 U.S. federal holidays and your vacations."
)]
pub struct Cli {
    /// Configuration file path
    ///
    /// TOML configuration file with the store location and display
    /// preferences. All settings have defaults, so the flag is optional.
    #[arg(
        long,
        short,
        required = false,
        value_parser = ConfParser,
        help = "Path to TOML configuration file"
    )]
    conf: Option<Conf>,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    /// Returns the parsed configuration, or the built-in defaults
    pub fn conf(&self) -> Conf {
        self.conf.clone().unwrap_or_default()
    }

    /// Returns the requested command
    pub fn command(&self) -> &Command {
        &self.command
    }
}

/// Top-level commands
#[derive(Subcommand)]
pub enum Command {
    /// Sign in by waiting for the token file the browser helper writes
    Login {
        /// Path where the sign-in helper delivers its JSON token pair
        #[arg(long, short)]
        tokens: PathBuf,

        /// Seconds to wait for the token file before giving up
        /// (default 5)
        #[arg(long)]
        wait: Option<u64>,
    },

    /// Sign out of the current session
    Logout,

    /// Show who is signed in
    Status,

    /// Set the countdown start date
    Start {
        #[arg(value_parser = DateParser, help = DATE_HELP)]
        date: NaiveDate,
    },

    /// Set the countdown end date
    End {
        #[arg(value_parser = DateParser, help = DATE_HELP)]
        date: NaiveDate,
    },

    /// Manage vacation ranges
    Vacation {
        #[command(subcommand)]
        action: VacationAction,
    },

    /// Show the countdown metrics and calendars
    Show {
        /// Headline metric to display
        #[arg(long, short, value_enum)]
        metric: Option<Metric>,

        /// Render the month calendars
        #[arg(long)]
        calendar: bool,

        /// Calendar month to display instead of the start date's month
        /// (any date within the wanted month)
        #[arg(long, value_parser = DateParser, help = DATE_HELP)]
        month: Option<NaiveDate>,

        /// Navigate the calendar this many months from its default;
        /// negative values step back
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i32,

        /// Print the metrics snapshot as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Vacation list operations, addressed by list position
#[derive(Subcommand)]
pub enum VacationAction {
    /// Add a vacation range; a missing end snaps to the day after start
    Add {
        #[arg(value_parser = DateParser, help = DATE_HELP)]
        start: NaiveDate,

        #[arg(value_parser = DateParser, help = DATE_HELP)]
        end: Option<NaiveDate>,
    },

    /// Replace the vacation at a list position
    Set {
        index: usize,

        #[arg(value_parser = DateParser, help = DATE_HELP)]
        start: NaiveDate,

        #[arg(value_parser = DateParser, help = DATE_HELP)]
        end: Option<NaiveDate>,
    },

    /// Remove the vacation at a list position (see `vacation list`)
    Remove { index: usize },

    /// List vacation ranges with their positions
    List,
}

/// Custom parser for strict `YYYY-MM-DD` date arguments
#[derive(Clone)]
struct DateParser;

impl TypedValueParser for DateParser {
    type Value = NaiveDate;

    /// Parses a date argument through the strict parser
    ///
    /// # Arguments
    /// * `value` - String value from the command line
    ///
    /// # Returns
    /// * `Result<NaiveDate, clap::Error>` - Parsed date or error
    ///
    /// Rejection happens at argument-parse time, so a rolled-over date like
    /// `2024-02-30` never reaches any command handler.
    fn parse_ref(
        &self,
        _cmd: &clap::Command,
        _arg: Option<&clap::Arg>,
        value: &std::ffi::OsStr,
    ) -> Result<Self::Value, clap::Error> {
        let Some(text) = value.to_str() else {
            return Err(clap::Error::new(clap::error::ErrorKind::DisplayHelp));
        };

        date::parse_date(text).map_err(|_| {
            clap::Error::raw(
                clap::error::ErrorKind::InvalidValue,
                format!("{DATE_HELP}, got '{text}'\n"),
            )
        })
    }
}

/// Custom parser for configuration file loading
#[derive(Clone)]
struct ConfParser;

impl TypedValueParser for ConfParser {
    type Value = Conf;

    /// Parses configuration file path and loads the configuration
    ///
    /// # Arguments
    /// * `value` - Path to configuration file
    ///
    /// # Returns
    /// * `Result<Conf, clap::Error>` - Parsed configuration or error
    ///
    /// # Errors
    /// * File not found or permission denied
    /// * Invalid TOML format
    fn parse_ref(
        &self,
        _cmd: &clap::Command,
        _arg: Option<&clap::Arg>,
        value: &std::ffi::OsStr,
    ) -> Result<Self::Value, clap::Error> {
        let Some(file_path) = value.to_str() else {
            return Err(clap::Error::new(clap::error::ErrorKind::DisplayHelp));
        };

        // Open configuration file
        let mut file = File::open(file_path).map_err(|e| {
            let error_msg = match e.kind() {
                std::io::ErrorKind::NotFound => {
                    format!("Configuration file '{}' not found", file_path)
                }
                std::io::ErrorKind::PermissionDenied => {
                    format!("Permission denied for '{}'", file_path)
                }
                _ => format!("Cannot access configuration file '{}': {}", file_path, e),
            };
            clap::Error::raw(clap::error::ErrorKind::InvalidValue, error_msg)
        })?;

        // Read file contents
        let mut config_content = String::new();
        file.read_to_string(&mut config_content).map_err(|e| {
            clap::Error::raw(
                clap::error::ErrorKind::InvalidValue,
                format!("Failed to read configuration file '{}': {}", file_path, e),
            )
        })?;

        // Parse TOML configuration
        toml::from_str(&config_content).map_err(|e| {
            clap::Error::raw(
                clap::error::ErrorKind::InvalidValue,
                format!("Invalid configuration in '{}': {}", file_path, e),
            )
        })
    }
}
