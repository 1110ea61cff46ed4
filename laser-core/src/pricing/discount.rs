//! Quantity based discount suggestion with manual override.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::config::form_defaults;

/// Discount tiers as (minimum quantity, percent), highest first.
const DISCOUNT_TIERS: [(u32, Decimal); 3] = [(100, dec!(15.0)), (50, dec!(10.0)), (10, dec!(5.0))];

/// Suggested discount percentage for an order quantity.
pub fn suggest_discount(quantity: u32) -> Decimal {
    DISCOUNT_TIERS
        .iter()
        .find(|(min_qty, _)| quantity >= *min_qty)
        .map(|(_, percent)| *percent)
        .unwrap_or(Decimal::ZERO)
}

/// Tracks the applied discount across input changes.
///
/// The applied value is reset to the suggestion only when the quantity
/// actually changes. Manual edits stick until then.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountTracker {
    last_quantity: u32,
    applied: Decimal,
}

impl Default for DiscountTracker {
    fn default() -> Self {
        Self {
            last_quantity: form_defaults::QUANTITY,
            applied: form_defaults::DISCOUNT_PERCENT,
        }
    }
}

impl DiscountTracker {
    /// Handle a quantity input. Returns true if the applied discount was
    /// replaced by a new suggestion.
    pub fn on_quantity_changed(&mut self, new_quantity: u32) -> bool {
        if new_quantity == self.last_quantity {
            return false;
        }
        self.applied = suggest_discount(new_quantity);
        self.last_quantity = new_quantity;
        tracing::debug!(
            "Quantity changed to {}, discount set to {}%",
            new_quantity,
            self.applied
        );
        true
    }

    /// Manual override of the applied discount.
    pub fn set_manual(&mut self, percent: Decimal) {
        self.applied = percent;
    }

    /// Discount currently applied to quotes.
    pub fn applied(&self) -> Decimal {
        self.applied
    }

    /// Suggestion for the last seen quantity, independent of overrides.
    pub fn suggested(&self) -> Decimal {
        suggest_discount(self.last_quantity)
    }
}
