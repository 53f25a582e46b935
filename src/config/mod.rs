#[cfg(feature = "cli")]
pub mod cli;
pub mod rates;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use rates::RateSchedule;
