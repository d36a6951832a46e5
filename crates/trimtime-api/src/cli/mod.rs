//! CLI definitions and the interactive booking flows for the `trimtime`
//! binary.
//!
//! Uses clap derive macros for argument parsing. Running `trimtime` with no
//! subcommand opens the booking menu.

pub mod book;
pub mod cancel;
pub mod display;
pub mod menu;
pub mod prompt;
pub mod search;
pub mod view;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::config::ConfigOverrides;

/// Haircut appointment booking at the shop counter.
#[derive(Parser)]
#[command(name = "trimtime", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Suppress all log output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed log output on stderr (-v for verbose, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Shop configuration file (TOML). Built-in catalog and roster if omitted.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Reject appointment dates that are not real calendar days.
    #[arg(long, conflicts_with = "lenient_dates")]
    pub strict_dates: bool,

    /// Accept any 8-character date entry without a calendar check.
    #[arg(long)]
    pub lenient_dates: bool,

    /// Let a phone number already on file book another appointment.
    #[arg(long)]
    pub allow_returning_customers: bool,

    /// Currency symbol shown before prices.
    #[arg(long, value_name = "SYMBOL")]
    pub currency: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

impl Cli {
    /// Configuration settings given as flags.
    pub fn overrides(&self) -> ConfigOverrides {
        let strict_dates = if self.strict_dates {
            Some(true)
        } else if self.lenient_dates {
            Some(false)
        } else {
            None
        };

        ConfigOverrides {
            strict_dates,
            allow_returning_customers: self.allow_returning_customers.then_some(true),
            currency_symbol: self.currency.clone(),
        }
    }
}
