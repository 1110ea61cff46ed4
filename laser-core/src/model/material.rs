//! Material entry representing one row of the materials catalog.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::money;

/// A material with its base net price per sheet or base unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialEntry {
    /// Grouping shown in the catalog (e.g. "Sklejka").
    pub category: String,
    /// Display name, used as the lookup key.
    pub name: String,
    /// Net price per base unit.
    pub base_unit_price: Decimal,
}

impl MaterialEntry {
    /// Create a new material entry.
    pub fn new(
        category: impl Into<String>,
        name: impl Into<String>,
        base_unit_price: Decimal,
    ) -> Self {
        Self {
            category: category.into(),
            name: name.into(),
            base_unit_price,
        }
    }

    /// Label shown in the material picker, e.g. `Sklejka 3mm (2.90 PLN)`.
    pub fn option_label(&self, currency: &str) -> String {
        format!(
            "{} ({} {})",
            self.name,
            money::format_amount(self.base_unit_price),
            currency
        )
    }

    /// Check whether the price is usable without warnings.
    pub fn has_valid_price(&self) -> bool {
        !self.base_unit_price.is_sign_negative()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_option_label() {
        let entry = MaterialEntry::new("Sklejka", "Sklejka 3mm", dec!(2.9));
        assert_eq!(entry.option_label("PLN"), "Sklejka 3mm (2.90 PLN)");
    }

    #[test]
    fn test_has_valid_price() {
        assert!(MaterialEntry::new("Inne", "Filc", dec!(0)).has_valid_price());
        assert!(!MaterialEntry::new("Inne", "Filc", dec!(-1)).has_valid_price());
    }
}
