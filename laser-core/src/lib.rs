//! laser-core - Core library for laser cutting and engraving quotes.
//!
//! This library turns a material choice and job parameters (quantity,
//! cutting length, engraving area, discount, setup and design work) into a
//! net and gross quote, and keeps named quote variants for comparison.
//!
//! # Example
//!
//! ```
//! use laser_core::{calculate_price, MaterialsCatalog, OrderSpec};
//!
//! let catalog = MaterialsCatalog::seed();
//! let material = catalog.lookup_by_name("Sklejka 3mm").unwrap().clone();
//! let breakdown = calculate_price(&OrderSpec::new(material, 1));
//! assert_eq!(breakdown.final_net.normalize().to_string(), "37.752");
//! ```
//!
//! All state is owned by the caller, typically through a [`QuoteSession`].
//! Nothing is persisted: catalog edits and saved variants live as long as
//! the session does.

pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod pricing;
pub mod report;
pub mod session;
pub mod validation;
pub mod variants;

// Re-exports for convenience
pub use catalog::MaterialsCatalog;
pub use config::PricingRates;
pub use error::{QuoteError, Result};
pub use model::{MaterialEntry, OrderForm, OrderSpec, PriceBreakdown, Variant, VariantContext};
pub use pricing::{calculate_price, suggest_discount, DiscountTracker, PricingEngine};
pub use session::QuoteSession;
pub use validation::{validate_order, ValidationResult};
pub use variants::VariantStore;

/// Price an order after checking it against the entry form bounds.
///
/// Validation warnings are logged; errors reject the order.
pub fn quote_order(order: &OrderSpec, rates: &PricingRates) -> Result<PriceBreakdown> {
    validate_order(order).into_result()?;
    Ok(PricingEngine::new(rates.clone()).calculate(order))
}
