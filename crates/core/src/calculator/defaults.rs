//! Starting values for a fresh or reset calculator.

use dutchpay_shared::config::CalculatorConfig;

use crate::split::SplitError;
use crate::split::types::{RoundingUnit, validate_extra_payer_choice};

/// Values a calculator starts from and returns to on reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorDefaults {
    /// Rounding unit.
    pub rounding_unit: RoundingUnit,
    /// Requested extra payers.
    pub extra_payers: usize,
    /// Participants on a fresh roster.
    pub initial_participants: usize,
    /// People in the single-absorber form.
    pub people_count: u32,
    /// Prefix of generated participant names.
    pub name_prefix: String,
}

impl Default for CalculatorDefaults {
    fn default() -> Self {
        Self {
            rounding_unit: RoundingUnit::Hundred,
            extra_payers: 1,
            initial_participants: 2,
            people_count: 2,
            name_prefix: "사람".to_string(),
        }
    }
}

impl TryFrom<&CalculatorConfig> for CalculatorDefaults {
    type Error = SplitError;

    fn try_from(config: &CalculatorConfig) -> Result<Self, Self::Error> {
        Ok(Self {
            rounding_unit: RoundingUnit::try_from(config.rounding_unit)?,
            extra_payers: validate_extra_payer_choice(config.extra_payers)?,
            initial_participants: config.initial_participants.max(1),
            people_count: config.people_count.max(1),
            name_prefix: config.name_prefix.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_default_config() {
        let defaults = CalculatorDefaults::try_from(&CalculatorConfig::default()).unwrap();
        assert_eq!(defaults, CalculatorDefaults::default());
    }

    #[test]
    fn test_rejects_unsupported_unit() {
        let config = CalculatorConfig {
            rounding_unit: 50,
            ..CalculatorConfig::default()
        };
        assert_eq!(
            CalculatorDefaults::try_from(&config).unwrap_err(),
            SplitError::UnsupportedRoundingUnit("50".into())
        );
    }

    #[test]
    fn test_rejects_extra_payers_out_of_range() {
        let config = CalculatorConfig {
            extra_payers: 7,
            ..CalculatorConfig::default()
        };
        assert!(CalculatorDefaults::try_from(&config).is_err());
    }
}
