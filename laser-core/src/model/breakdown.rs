//! Price breakdown produced by the pricing engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Every intermediate amount of a quote, unrounded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// Material cost per piece including waste and margin.
    pub material_unit_cost: Decimal,
    /// Cutting cost per piece.
    pub cutting_unit_cost: Decimal,
    /// Engraving cost per piece.
    pub engraving_unit_cost: Decimal,
    /// Sum of the per-piece costs.
    pub unit_base_net: Decimal,
    /// Per-piece cost times quantity.
    pub production_total_net: Decimal,
    /// Discount taken off the production cost.
    pub discount_amount: Decimal,
    /// Production cost after discount.
    pub production_after_discount: Decimal,
    /// Setup fee plus design work. Never discounted.
    pub services_cost: Decimal,
    /// Total without VAT.
    pub final_net: Decimal,
    /// Total with VAT.
    pub final_gross: Decimal,
    /// Discounted production cost per piece.
    pub unit_final_net: Decimal,
}

impl PriceBreakdown {
    /// VAT part of the gross total.
    pub fn vat_amount(&self) -> Decimal {
        self.final_gross - self.final_net
    }
}
