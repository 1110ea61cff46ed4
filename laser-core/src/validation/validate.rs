//! Bounds checks for entry form values.

use rust_decimal::Decimal;

use crate::config::{MAX_INPUT_VALUE, MAX_QUANTITY};
use crate::error::{QuoteError, Result};
use crate::model::{MaterialEntry, OrderSpec};

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }

    /// Log warnings and turn errors into a `ValidationFailed` error.
    pub fn into_result(self) -> Result<()> {
        for warning in &self.warnings {
            tracing::warn!("{}", warning);
        }
        if self.passed {
            Ok(())
        } else {
            Err(QuoteError::ValidationFailed {
                errors: self.errors,
            })
        }
    }
}

/// Validate a catalog entry.
pub fn validate_material(material: &MaterialEntry) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if material.name.trim().is_empty() {
        result.add_warning("Material has an empty name");
    }

    if !material.has_valid_price() {
        result.add_warning(format!(
            "Material '{}': Negative base price {}",
            material.name, material.base_unit_price
        ));
    }

    if material.base_unit_price.abs() > MAX_INPUT_VALUE {
        result.add_error(format!(
            "Material '{}': Base price {} exceeds {}",
            material.name, material.base_unit_price, MAX_INPUT_VALUE
        ));
    }

    result
}

/// Validate an order against the entry form bounds.
pub fn validate_order(order: &OrderSpec) -> ValidationResult {
    let mut result = ValidationResult::ok();
    result.merge(validate_material(&order.material));

    if order.quantity < 1 || order.quantity > MAX_QUANTITY {
        result.add_error(format!(
            "Quantity must be between 1 and {}, got {}",
            MAX_QUANTITY, order.quantity
        ));
    }

    check_in_range(&mut result, "Cutting length", order.cutting_length_m);
    check_in_range(&mut result, "Engraving area", order.engraving_area_cm2);
    check_in_range(&mut result, "Setup fee", order.setup_fee);
    check_in_range(&mut result, "Design hours", order.design_hours);

    if order.discount_percent < Decimal::ZERO || order.discount_percent > Decimal::ONE_HUNDRED {
        result.add_error(format!(
            "Discount must be between 0 and 100%, got {}",
            order.discount_percent
        ));
    }

    // The form has no minimum on the hourly rate
    if order.design_rate < Decimal::ZERO {
        result.add_warning(format!("Negative design rate {}", order.design_rate));
    }
    if order.design_rate.abs() > MAX_INPUT_VALUE {
        result.add_error(format!(
            "Design rate {} exceeds {}",
            order.design_rate, MAX_INPUT_VALUE
        ));
    }

    result
}

fn check_in_range(result: &mut ValidationResult, field: &str, value: Decimal) {
    if value < Decimal::ZERO {
        result.add_error(format!("{} must not be negative, got {}", field, value));
    } else if value > MAX_INPUT_VALUE {
        result.add_error(format!(
            "{} must not exceed {}, got {}",
            field, MAX_INPUT_VALUE, value
        ));
    }
}
