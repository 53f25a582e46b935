use crate::utils::error::{ParkingError, Result};
use crate::utils::validation::{validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Pricing constants applied to every stay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RateSchedule {
    /// Charging starts at this hour (inclusive).
    pub billable_start_hour: u32,
    /// Charging stops at this hour.
    pub billable_end_hour: u32,
    pub hourly_rate: u64,
    /// Added once to every non-free day computation.
    pub first_hour_surcharge: u64,
    pub daily_cap: u64,
}

impl Default for RateSchedule {
    fn default() -> Self {
        Self {
            billable_start_hour: 9,
            billable_end_hour: 18,
            hourly_rate: 5,
            first_hour_surcharge: 5,
            daily_cap: 25,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RatesFile {
    #[serde(default)]
    rates: RateSchedule,
}

impl RateSchedule {
    /// 從 TOML 檔案載入費率
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ParkingError::IoError)?;
        let schedule = Self::from_toml_str(&content)?;
        tracing::debug!(
            "Loaded rate schedule from {}: {:?}",
            path.as_ref().display(),
            schedule
        );
        Ok(schedule)
    }

    /// 從 TOML 字串解析並驗證費率
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: RatesFile = toml::from_str(content)?;
        file.rates.validate()?;
        Ok(file.rates)
    }
}

impl Validate for RateSchedule {
    fn validate(&self) -> Result<()> {
        validate_range("rates.billable_start_hour", self.billable_start_hour, 0, 23)?;
        validate_range("rates.billable_end_hour", self.billable_end_hour, 0, 23)?;

        if self.billable_start_hour >= self.billable_end_hour {
            return Err(ParkingError::ConfigError {
                message: format!(
                    "billable window {}:00 - {}:00 is empty or inverted",
                    self.billable_start_hour, self.billable_end_hour
                ),
            });
        }

        if self.daily_cap < self.first_hour_surcharge {
            return Err(ParkingError::ConfigError {
                message: format!(
                    "daily_cap ({}) is below first_hour_surcharge ({})",
                    self.daily_cap, self.first_hour_surcharge
                ),
            });
        }

        Ok(())
    }
}
