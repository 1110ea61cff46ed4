//! Saved quote variant for side-by-side comparison.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A named snapshot of a computed quote. Holds raw amounts only; display
/// strings are produced by [`crate::report`] when rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    /// Short unique identifier.
    pub id: String,
    /// User supplied or generated ("Wariant N") name.
    pub name: String,
    /// Material name at the time of saving.
    pub material_name: String,
    pub quantity: u32,
    /// Applied discount in percent.
    pub discount_percent: Decimal,
    /// Discounted production cost per piece.
    pub unit_final_net: Decimal,
    /// Setup fee plus design work.
    pub services_cost: Decimal,
    /// Total without VAT, summed for the comparison table.
    pub final_net: Decimal,
}

/// Order details stored with a variant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariantContext {
    pub material_name: String,
    pub quantity: u32,
    pub discount_percent: Decimal,
    /// Optional display name; blank names get a generated one.
    pub name: Option<String>,
}

impl VariantContext {
    /// Context for a quote of `quantity` pieces of `material_name`.
    pub fn new(material_name: impl Into<String>, quantity: u32, discount_percent: Decimal) -> Self {
        Self {
            material_name: material_name.into(),
            quantity,
            discount_percent,
            name: None,
        }
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
