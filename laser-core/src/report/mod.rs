//! Text rendering of quotes, variants and the catalog.
//!
//! Amounts are kept unrounded everywhere else; rounding happens here, at
//! display time.

mod text;

pub use text::{format_money, format_percent, render_catalog, render_quote, render_variants};
