//! Pricing: quantity discounts and the quote engine.

mod discount;
mod engine;

pub use discount::{suggest_discount, DiscountTracker};
pub use engine::{calculate_price, PricingEngine};
