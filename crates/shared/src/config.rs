//! Application configuration management.

use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::types::{AmountFormatter, Locale};

/// Rounding units accepted by the calculator.
pub const SUPPORTED_ROUNDING_UNITS: [u32; 3] = [100, 1000, 10000];

/// Largest selectable number of extra payers.
pub const MAX_EXTRA_PAYERS: usize = 4;

/// Largest number of people or participants a form accepts.
pub const MAX_PEOPLE: u32 = 1000;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Calculator defaults.
    pub calculator: CalculatorConfig,
    /// Display configuration.
    pub display: DisplayConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Defaults the calculator starts from and returns to on reset.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Rounding unit (100, 1000 or 10000).
    pub rounding_unit: u32,
    /// Requested number of extra payers (1-4).
    pub extra_payers: usize,
    /// Number of participants on a fresh roster.
    pub initial_participants: usize,
    /// Number of people in the single-absorber form.
    pub people_count: u32,
    /// Prefix of generated participant names (`"<prefix> <id>"`).
    pub name_prefix: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            rounding_unit: 100,
            extra_payers: 1,
            initial_participants: 2,
            people_count: 2,
            name_prefix: "사람".to_string(),
        }
    }
}

/// Display configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Locale for unit labels.
    pub locale: Locale,
    /// Currency label appended to amounts.
    pub currency_label: String,
    /// Thousands separator.
    pub group_separator: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            locale: Locale::Ko,
            currency_label: "원".to_string(),
            group_separator: ",".to_string(),
        }
    }
}

impl DisplayConfig {
    /// Builds the amount formatter for this display configuration.
    #[must_use]
    pub fn formatter(&self) -> AmountFormatter {
        AmountFormatter::new(self.group_separator.clone(), self.currency_label.clone())
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set.
    pub filter: String,
    /// Output format.
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "dutchpay=info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl AppConfig {
    /// Loads configuration from config files and environment.
    ///
    /// Sources, later ones winning:
    /// - `config/default.toml`
    /// - `config/{RUN_MODE}.toml`
    /// - `DUTCHPAY__*` environment variables (`__` separates sections)
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed or the result fails
    /// [`AppConfig::validate`].
    pub fn load() -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("DUTCHPAY").separator("__"))
            .build()?;

        let loaded: Self = config.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Checks the loaded values against what the calculator accepts.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` naming the first offending key.
    pub fn validate(&self) -> AppResult<()> {
        let calc = &self.calculator;

        if !SUPPORTED_ROUNDING_UNITS.contains(&calc.rounding_unit) {
            return Err(AppError::Config(format!(
                "calculator.rounding_unit must be one of 100, 1000, 10000 (got {})",
                calc.rounding_unit
            )));
        }
        if calc.extra_payers == 0 || calc.extra_payers > MAX_EXTRA_PAYERS {
            return Err(AppError::Config(format!(
                "calculator.extra_payers must be between 1 and {MAX_EXTRA_PAYERS} (got {})",
                calc.extra_payers
            )));
        }
        if calc.initial_participants == 0 || calc.initial_participants > MAX_PEOPLE as usize {
            return Err(AppError::Config(format!(
                "calculator.initial_participants must be between 1 and {MAX_PEOPLE} (got {})",
                calc.initial_participants
            )));
        }
        if calc.people_count == 0 || calc.people_count > MAX_PEOPLE {
            return Err(AppError::Config(format!(
                "calculator.people_count must be between 1 and {MAX_PEOPLE} (got {})",
                calc.people_count
            )));
        }
        if self.display.group_separator.is_empty() {
            return Err(AppError::Config(
                "display.group_separator must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
