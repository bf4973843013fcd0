//! Plan rules mapping payment amounts to subscription duration

use crate::error::{ExpiryError, Result};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::path::Path;

/// Pricing rules for converting a payment amount into added months
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanRules {
    /// Price of one month, in minor currency units
    pub monthly_unit: i64,

    /// Flat amount that buys the annual plan
    pub annual_plan_amount: i64,

    /// Months granted by the annual plan
    pub annual_plan_months: u32,
}

impl Default for PlanRules {
    fn default() -> Self {
        Self {
            monthly_unit: 10_000,
            annual_plan_amount: 100_000,
            annual_plan_months: 12,
        }
    }
}

impl PlanRules {
    /// Load rules from a JSON file; missing fields fall back to the defaults
    pub fn from_json_path(path: &Path) -> std::result::Result<Self, Box<dyn Error>> {
        let file = File::open(path)?;
        let rules: PlanRules = serde_json::from_reader(file)?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn validate(&self) -> Result<()> {
        if self.monthly_unit <= 0 {
            return Err(ExpiryError::InvalidConfig(format!(
                "monthly unit must be positive, got {}",
                self.monthly_unit
            )));
        }
        if self.annual_plan_amount <= 0 {
            return Err(ExpiryError::InvalidConfig(format!(
                "annual plan amount must be positive, got {}",
                self.annual_plan_amount
            )));
        }
        if self.annual_plan_months == 0 {
            return Err(ExpiryError::InvalidConfig(
                "annual plan must grant at least one month".into(),
            ));
        }
        Ok(())
    }

    /// Months bought by `pay_amount`.
    /// The annual plan amount is a flat override; everything else truncates,
    /// so amounts below one monthly unit buy zero months.
    pub fn added_months(&self, pay_amount: i64) -> u32 {
        if pay_amount == self.annual_plan_amount {
            return self.annual_plan_months;
        }
        let months = pay_amount.max(0).checked_div(self.monthly_unit).unwrap_or(0);
        u32::try_from(months.max(0)).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_added_months() {
        let rules = PlanRules::default();
        assert_eq!(rules.added_months(10_000), 1);
        assert_eq!(rules.added_months(20_000), 2);
        assert_eq!(rules.added_months(30_000), 3);
        assert_eq!(rules.added_months(15_000), 1);
        assert_eq!(rules.added_months(5_000), 0);
        assert_eq!(rules.added_months(90_000), 9);
        assert_eq!(rules.added_months(110_000), 11);
    }

    #[test]
    fn test_annual_plan_override() {
        let rules = PlanRules::default();
        // Linear truncation would give 10
        assert_eq!(rules.added_months(100_000), 12);
    }

    #[test]
    fn test_validate() {
        assert!(PlanRules::default().validate().is_ok());

        let zero_unit = PlanRules { monthly_unit: 0, ..PlanRules::default() };
        assert!(matches!(zero_unit.validate(), Err(ExpiryError::InvalidConfig(_))));
        assert_eq!(zero_unit.added_months(10_000), 0);

        let no_months = PlanRules { annual_plan_months: 0, ..PlanRules::default() };
        assert!(no_months.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let rules: PlanRules = serde_json::from_str(r#"{"monthly_unit": 5000}"#).unwrap();
        assert_eq!(rules.monthly_unit, 5_000);
        assert_eq!(rules.annual_plan_amount, 100_000);
        assert_eq!(rules.added_months(15_000), 3);
    }
}
