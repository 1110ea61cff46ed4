//! Quote calculation.

use rust_decimal::Decimal;

use crate::config::PricingRates;
use crate::model::{OrderSpec, PriceBreakdown};

/// Turns an order into a full price breakdown.
///
/// The engine does not validate its input: negative prices or hours flow
/// through the formulas unchanged. Callers check bounds with
/// [`crate::validate_order`] first.
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    rates: PricingRates,
}

impl PricingEngine {
    /// Create an engine with the given rates.
    pub fn new(rates: PricingRates) -> Self {
        Self { rates }
    }

    /// Rates used by this engine.
    pub fn rates(&self) -> &PricingRates {
        &self.rates
    }

    /// Material cost per piece: base price with waste and margin.
    pub fn material_unit_cost(&self, base_unit_price: Decimal) -> Decimal {
        base_unit_price * self.rates.waste_factor * self.rates.margin_factor
    }

    /// One-off services: setup plus design work.
    pub fn services_cost(&self, order: &OrderSpec) -> Decimal {
        order.setup_fee + order.design_hours * order.design_rate
    }

    /// Compute the price breakdown for an order.
    pub fn calculate(&self, order: &OrderSpec) -> PriceBreakdown {
        let quantity = Decimal::from(order.quantity);

        // Per piece
        let material_unit_cost = self.material_unit_cost(order.material.base_unit_price);
        let cutting_unit_cost = order.cutting_length_m * self.rates.cutting_rate;
        let engraving_unit_cost = order.engraving_area_cm2 * self.rates.engraving_rate;
        let unit_base_net = material_unit_cost + cutting_unit_cost + engraving_unit_cost;

        // Production, the only part the discount touches
        let production_total_net = unit_base_net * quantity;
        let discount_amount = production_total_net * (order.discount_percent / Decimal::ONE_HUNDRED);
        let production_after_discount = production_total_net - discount_amount;

        let services_cost = self.services_cost(order);

        let final_net = production_after_discount + services_cost;
        let final_gross = final_net * (Decimal::ONE + self.rates.vat_rate);

        let unit_final_net = if order.quantity > 0 {
            production_after_discount / quantity
        } else {
            Decimal::ZERO
        };

        let breakdown = PriceBreakdown {
            material_unit_cost,
            cutting_unit_cost,
            engraving_unit_cost,
            unit_base_net,
            production_total_net,
            discount_amount,
            production_after_discount,
            services_cost,
            final_net,
            final_gross,
            unit_final_net,
        };

        tracing::debug!(
            material = %order.material.name,
            quantity = order.quantity,
            final_net = %breakdown.final_net,
            final_gross = %breakdown.final_gross,
            "Calculated quote"
        );

        breakdown
    }
}

/// Compute a breakdown with the default rates.
pub fn calculate_price(order: &OrderSpec) -> PriceBreakdown {
    PricingEngine::default().calculate(order)
}
