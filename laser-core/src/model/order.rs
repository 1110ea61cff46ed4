//! Order specification passed to the pricing engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::MaterialEntry;
use crate::config::form_defaults;

/// A single quote request. Built fresh from the current input each time a
/// price is computed; the material is captured by value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSpec {
    /// Selected material snapshot.
    pub material: MaterialEntry,
    /// Number of pieces.
    pub quantity: u32,
    /// Cutting line length per piece, in meters.
    pub cutting_length_m: Decimal,
    /// Engraving area per piece, in cm².
    pub engraving_area_cm2: Decimal,
    /// Discount applied to production cost, in percent.
    pub discount_percent: Decimal,
    /// One-off setup charge.
    pub setup_fee: Decimal,
    /// Graphic design hours.
    pub design_hours: Decimal,
    /// Graphic design hourly rate.
    pub design_rate: Decimal,
}

impl OrderSpec {
    /// Create an order for `quantity` pieces of `material` with form defaults
    /// for everything else.
    pub fn new(material: MaterialEntry, quantity: u32) -> Self {
        Self {
            material,
            quantity,
            cutting_length_m: form_defaults::CUTTING_LENGTH_M,
            engraving_area_cm2: form_defaults::ENGRAVING_AREA_CM2,
            discount_percent: form_defaults::DISCOUNT_PERCENT,
            setup_fee: form_defaults::SETUP_FEE,
            design_hours: form_defaults::DESIGN_HOURS,
            design_rate: form_defaults::DESIGN_RATE,
        }
    }
}

/// Raw values of the entry form, minus the discount which is tracked
/// separately by [`crate::DiscountTracker`].
#[derive(Debug, Clone, PartialEq)]
pub struct OrderForm {
    /// Name of the selected material, if any.
    pub material_name: Option<String>,
    pub quantity: u32,
    pub cutting_length_m: Decimal,
    pub engraving_area_cm2: Decimal,
    pub setup_fee: Decimal,
    pub design_hours: Decimal,
    pub design_rate: Decimal,
}

impl Default for OrderForm {
    fn default() -> Self {
        Self {
            material_name: None,
            quantity: form_defaults::QUANTITY,
            cutting_length_m: form_defaults::CUTTING_LENGTH_M,
            engraving_area_cm2: form_defaults::ENGRAVING_AREA_CM2,
            setup_fee: form_defaults::SETUP_FEE,
            design_hours: form_defaults::DESIGN_HOURS,
            design_rate: form_defaults::DESIGN_RATE,
        }
    }
}

impl OrderForm {
    /// Snapshot the form into an order for the given material and discount.
    pub fn to_order(&self, material: &MaterialEntry, discount_percent: Decimal) -> OrderSpec {
        OrderSpec {
            material: material.clone(),
            quantity: self.quantity,
            cutting_length_m: self.cutting_length_m,
            engraving_area_cm2: self.engraving_area_cm2,
            discount_percent,
            setup_fee: self.setup_fee,
            design_hours: self.design_hours,
            design_rate: self.design_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_uses_form_defaults() {
        let order = OrderSpec::new(MaterialEntry::new("Inne", "Filc", dec!(2.5)), 3);
        assert_eq!(order.quantity, 3);
        assert_eq!(order.cutting_length_m, dec!(1.5));
        assert_eq!(order.setup_fee, dec!(30));
        assert_eq!(order.design_rate, dec!(100));
        assert_eq!(order.discount_percent, Decimal::ZERO);
    }

    #[test]
    fn test_form_snapshot_copies_material() {
        let mut material = MaterialEntry::new("Inne", "Filc", dec!(2.5));
        let form = OrderForm::default();
        let order = form.to_order(&material, dec!(5));
        material.base_unit_price = dec!(9);
        assert_eq!(order.material.base_unit_price, dec!(2.5));
        assert_eq!(order.discount_percent, dec!(5));
        assert_eq!(order.quantity, 1);
    }
}
