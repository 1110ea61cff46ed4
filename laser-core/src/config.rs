//! Pricing constants and rate configuration.

use std::path::Path;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{QuoteError, Result};

/// Multiplier for material lost to offcuts and nesting.
pub const WASTE_FACTOR: Decimal = dec!(1.20);

/// Margin applied on top of the material cost including waste.
pub const MARGIN_FACTOR: Decimal = dec!(1.15);

/// Cutting price per running meter.
pub const CUTTING_RATE: Decimal = dec!(2.50);

/// Engraving price per cm².
pub const ENGRAVING_RATE: Decimal = dec!(0.20);

/// Value-added tax rate.
pub const VAT_RATE: Decimal = dec!(0.23);

/// Currency suffix used for display.
pub const DEFAULT_CURRENCY: &str = "PLN";

/// Decimal places shown for money.
pub const DISPLAY_DECIMALS: u32 = 2;

/// Largest quantity accepted by validation.
pub const MAX_QUANTITY: u32 = 1_000_000;

/// Largest magnitude accepted for prices, lengths, areas, fees, hours and rates.
/// Together with [`MAX_QUANTITY`] and [`MAX_RATE`] this keeps every quote
/// product inside the `Decimal` range.
pub const MAX_INPUT_VALUE: Decimal = dec!(1000000000);

/// Largest factor or rate accepted from a rates file.
pub const MAX_RATE: Decimal = dec!(1000);

/// Entry form defaults.
pub mod form_defaults {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    pub const QUANTITY: u32 = 1;
    pub const CUTTING_LENGTH_M: Decimal = dec!(1.5);
    pub const ENGRAVING_AREA_CM2: Decimal = dec!(0);
    pub const DISCOUNT_PERCENT: Decimal = dec!(0);
    pub const SETUP_FEE: Decimal = dec!(30);
    pub const DESIGN_HOURS: Decimal = dec!(0);
    pub const DESIGN_RATE: Decimal = dec!(100);
}

/// Rates used by the pricing engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingRates {
    /// Material waste multiplier.
    pub waste_factor: Decimal,
    /// Material margin multiplier.
    pub margin_factor: Decimal,
    /// Price per meter of cutting line.
    pub cutting_rate: Decimal,
    /// Price per cm² of engraving.
    pub engraving_rate: Decimal,
    /// VAT as a fraction (0.23 = 23%).
    pub vat_rate: Decimal,
    /// Currency suffix for display.
    pub currency: String,
}

impl Default for PricingRates {
    fn default() -> Self {
        Self {
            waste_factor: WASTE_FACTOR,
            margin_factor: MARGIN_FACTOR,
            cutting_rate: CUTTING_RATE,
            engraving_rate: ENGRAVING_RATE,
            vat_rate: VAT_RATE,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl PricingRates {
    /// Parse rates from a JSON document. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let rates: Self = serde_json::from_str(json)?;
        rates.validate()?;
        Ok(rates)
    }

    /// Check that every factor and rate lies in `0..=MAX_RATE`.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("waste_factor", self.waste_factor),
            ("margin_factor", self.margin_factor),
            ("cutting_rate", self.cutting_rate),
            ("engraving_rate", self.engraving_rate),
            ("vat_rate", self.vat_rate),
        ];
        for (name, value) in fields {
            if value < Decimal::ZERO || value > MAX_RATE {
                return Err(QuoteError::InvalidConfig {
                    message: format!(
                        "{} must be between 0 and {}, got {}",
                        name, MAX_RATE, value
                    ),
                });
            }
        }
        Ok(())
    }

    /// Load rates from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let rates = Self::from_json_str(&content)?;
        tracing::debug!("Loaded pricing rates from {}", path.display());
        Ok(rates)
    }

    /// VAT rate as a whole percentage (23 for 0.23).
    pub fn vat_percent(&self) -> Decimal {
        (self.vat_rate * Decimal::ONE_HUNDRED).normalize()
    }
}

/// Money helpers.
pub mod money {
    use rust_decimal::{Decimal, RoundingStrategy};

    use super::DISPLAY_DECIMALS;

    /// Round to display precision, half away from zero.
    #[inline]
    pub fn round_display(value: Decimal) -> Decimal {
        value.round_dp_with_strategy(DISPLAY_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Render an amount with exactly two decimals.
    pub fn format_amount(value: Decimal) -> String {
        format!("{:.2}", round_display(value))
    }

    /// Check that two amounts agree within `tolerance`.
    #[inline]
    pub fn approx_eq(a: Decimal, b: Decimal, tolerance: Decimal) -> bool {
        (a - b).abs() <= tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_rates_use_constants() {
        let rates = PricingRates::default();
        assert_eq!(rates.waste_factor, dec!(1.2));
        assert_eq!(rates.margin_factor, dec!(1.15));
        assert_eq!(rates.cutting_rate, dec!(2.5));
        assert_eq!(rates.engraving_rate, dec!(0.2));
        assert_eq!(rates.vat_rate, dec!(0.23));
        assert_eq!(rates.currency, "PLN");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let rates = PricingRates::from_json_str(r#"{"cutting_rate": 3.1, "currency": "EUR"}"#)
            .unwrap();
        assert_eq!(rates.cutting_rate, dec!(3.1));
        assert_eq!(rates.currency, "EUR");
        assert_eq!(rates.vat_rate, VAT_RATE);
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = PricingRates::from_json_str("{ not json").unwrap_err();
        assert_eq!(err.code(), crate::error::ErrorCode::InvalidConfig);
    }

    #[test]
    fn test_out_of_range_rate_is_config_error() {
        let err = PricingRates::from_json_str(r#"{"cutting_rate": 1e25}"#).unwrap_err();
        assert_eq!(err.code(), crate::error::ErrorCode::InvalidConfig);
        let err = PricingRates::from_json_str(r#"{"vat_rate": -0.1}"#).unwrap_err();
        assert_eq!(err.code(), crate::error::ErrorCode::InvalidConfig);
        assert!(PricingRates::default().validate().is_ok());
    }

    #[test]
    fn test_vat_percent() {
        assert_eq!(PricingRates::default().vat_percent().to_string(), "23");
    }

    #[test]
    fn test_round_display_half_away_from_zero() {
        assert_eq!(money::round_display(dec!(2.345)), dec!(2.35));
        assert_eq!(money::round_display(dec!(46.43496)), dec!(46.43));
        assert_eq!(money::round_display(dec!(-0.005)), dec!(-0.01));
    }

    #[test]
    fn test_format_amount_pads_to_two_decimals() {
        assert_eq!(money::format_amount(dec!(30)), "30.00");
        assert_eq!(money::format_amount(dec!(2.9)), "2.90");
        assert_eq!(money::format_amount(dec!(37.752)), "37.75");
    }
}
