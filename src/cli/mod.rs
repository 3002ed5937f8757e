use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use commands::{classify, net_worth, rule_conflicts};

#[derive(Parser)]
#[command(name = "finbook")]
#[command(about = "Personal finance engine: booking classification and net-worth reports")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the imported transaction lines through the booking rules and
    /// print the generated booking drafts as JSON
    Classify {
        /// Path to the JSON snapshot file
        #[arg(short, long, env = "FINBOOK_SNAPSHOT")]
        file: PathBuf,
    },
    /// Compute net worth at a reference date and print the breakdown
    NetWorth {
        /// Path to the JSON snapshot file
        #[arg(short, long, env = "FINBOOK_SNAPSHOT")]
        file: PathBuf,
        /// Reference date (YYYY-MM-DD); defaults to today
        #[arg(short, long)]
        date: Option<NaiveDate>,
        /// ISO 4217 currency code used for formatting
        #[arg(short, long, env = "FINBOOK_CURRENCY", default_value = "EUR")]
        currency: String,
    },
    /// Report criteria claimed by more than one active rule
    RuleConflicts {
        /// Path to the JSON snapshot file
        #[arg(short, long, env = "FINBOOK_SNAPSHOT")]
        file: PathBuf,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Classify { file } => {
                classify(&file)?;
            }
            Commands::NetWorth { file, date, currency } => {
                net_worth(&file, date, &currency)?;
            }
            Commands::RuleConflicts { file } => {
                rule_conflicts(&file)?;
            }
        }
        Ok(())
    }
}
