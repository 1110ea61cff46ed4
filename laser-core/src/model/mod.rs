//! Data model for laser cutting quotes.

mod breakdown;
mod material;
mod order;
mod variant;

pub use breakdown::PriceBreakdown;
pub use material::MaterialEntry;
pub use order::{OrderForm, OrderSpec};
pub use variant::{Variant, VariantContext};
