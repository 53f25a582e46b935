use anyhow::Context;
use chrono::{Local, TimeZone};
use clap::Parser;
use parking_fee::utils::logger;
use parking_fee::{CliConfig, FeeCalculator, ParkingError};

fn main() -> anyhow::Result<()> {
    // 參數數量錯誤時 clap 會印出用法並直接結束
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    let rates = config.rate_schedule().unwrap_or_else(|e| fail(&e));

    match config.utc_offset {
        Some(offset) => run(&config, FeeCalculator::new(rates, offset)),
        None => run(&config, FeeCalculator::new(rates, Local)),
    }
}

fn run<Tz: TimeZone>(config: &CliConfig, calculator: FeeCalculator<Tz>) -> anyhow::Result<()> {
    let breakdown = calculator
        .quote(&config.start, &config.end)
        .unwrap_or_else(|e| fail(&e));

    tracing::info!(
        "Priced {} day(s) from {} to {}",
        breakdown.days.len(),
        breakdown.start,
        breakdown.end
    );

    if config.json {
        let output =
            serde_json::to_string_pretty(&breakdown).context("Failed to serialize breakdown")?;
        println!("{}", output);
    } else {
        println!("Start date {}", breakdown.start);
        println!("End date {}", breakdown.end);
        println!("Total cost: {}", breakdown.total);
    }

    Ok(())
}

fn fail(e: &ParkingError) -> ! {
    tracing::error!("❌ {}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    if e.is_input_error() {
        eprintln!("💡 Provide unix timestamps. The start date has to be smaller than the end date");
    }
    std::process::exit(e.exit_code());
}
