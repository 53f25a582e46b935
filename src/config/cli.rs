use crate::config::rates::RateSchedule;
use crate::utils::error::Result;
use chrono::FixedOffset;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "parking-fee")]
#[command(about = "Calculate the parking cost between two unix timestamps")]
#[command(after_help = "The start date has to be smaller than the end date")]
pub struct CliConfig {
    /// Start of the stay as a unix timestamp
    #[arg(allow_negative_numbers = true)]
    pub start: String,

    /// End of the stay as a unix timestamp
    #[arg(allow_negative_numbers = true)]
    pub end: String,

    /// TOML file with a [rates] table overriding the standard rates
    #[arg(long)]
    pub rates: Option<PathBuf>,

    /// Read timestamps at this UTC offset (e.g. +01:00) instead of local time
    #[arg(long)]
    pub utc_offset: Option<FixedOffset>,

    #[arg(long, help = "Print the per-day breakdown as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    pub fn rate_schedule(&self) -> Result<RateSchedule> {
        match &self.rates {
            Some(path) => RateSchedule::from_file(path),
            None => Ok(RateSchedule::default()),
        }
    }
}
