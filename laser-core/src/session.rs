//! Caller-owned quoting session.
//!
//! A session bundles everything one user works with: the materials catalog,
//! the entry form, the discount tracker and the saved variants. Separate
//! users get separate sessions; nothing here is shared or global.

use rust_decimal::Decimal;

use crate::catalog::MaterialsCatalog;
use crate::config::PricingRates;
use crate::error::{QuoteError, Result};
use crate::model::{MaterialEntry, OrderForm, OrderSpec, PriceBreakdown, Variant, VariantContext};
use crate::pricing::{DiscountTracker, PricingEngine};
use crate::validation::validate_order;
use crate::variants::VariantStore;

/// State of one quoting session.
#[derive(Debug, Clone, Default)]
pub struct QuoteSession {
    catalog: MaterialsCatalog,
    form: OrderForm,
    discount: DiscountTracker,
    variants: VariantStore,
    engine: PricingEngine,
}

impl QuoteSession {
    /// Create a session over a catalog with the given rates.
    pub fn new(catalog: MaterialsCatalog, rates: PricingRates) -> Self {
        Self {
            catalog,
            engine: PricingEngine::new(rates),
            ..Default::default()
        }
    }

    /// Session with the seed catalog and default rates.
    pub fn with_seed_catalog() -> Self {
        Self::new(MaterialsCatalog::seed(), PricingRates::default())
    }

    pub fn catalog(&self) -> &MaterialsCatalog {
        &self.catalog
    }

    pub fn form(&self) -> &OrderForm {
        &self.form
    }

    pub fn discount(&self) -> &DiscountTracker {
        &self.discount
    }

    pub fn variants(&self) -> &VariantStore {
        &self.variants
    }

    pub fn rates(&self) -> &PricingRates {
        self.engine.rates()
    }

    /// Select a material by name.
    pub fn select_material(&mut self, name: &str) -> Result<&MaterialEntry> {
        let entry = self.catalog.lookup_by_name(name)?;
        self.form.material_name = Some(entry.name.clone());
        Ok(entry)
    }

    /// Set the quantity and re-suggest the discount if it changed.
    /// Returns true if the applied discount was reset.
    pub fn set_quantity(&mut self, quantity: u32) -> bool {
        self.form.quantity = quantity;
        self.discount.on_quantity_changed(quantity)
    }

    /// Override the applied discount.
    pub fn set_discount(&mut self, percent: Decimal) {
        self.discount.set_manual(percent);
    }

    pub fn set_cutting_length(&mut self, meters: Decimal) {
        self.form.cutting_length_m = meters;
    }

    pub fn set_engraving_area(&mut self, cm2: Decimal) {
        self.form.engraving_area_cm2 = cm2;
    }

    pub fn set_setup_fee(&mut self, fee: Decimal) {
        self.form.setup_fee = fee;
    }

    pub fn set_design_hours(&mut self, hours: Decimal) {
        self.form.design_hours = hours;
    }

    pub fn set_design_rate(&mut self, rate: Decimal) {
        self.form.design_rate = rate;
    }

    /// Add or update a catalog entry.
    pub fn upsert_material(&mut self, entry: MaterialEntry) {
        self.catalog.upsert(entry);
    }

    /// Append a catalog row.
    pub fn add_material_row(&mut self, entry: MaterialEntry) {
        self.catalog.add_row(entry);
    }

    /// Remove a catalog entry. Saved variants are not affected.
    pub fn remove_material(&mut self, name: &str) -> Result<MaterialEntry> {
        self.catalog.remove(name)
    }

    /// Material the next quote will use.
    ///
    /// Falls back to the first catalog entry when nothing is selected or the
    /// selection was removed from the catalog.
    pub fn selected_material(&self) -> Result<&MaterialEntry> {
        if let Some(name) = &self.form.material_name {
            match self.catalog.lookup_by_name(name) {
                Ok(entry) => return Ok(entry),
                Err(_) => tracing::warn!(
                    "Selected material '{}' no longer in catalog, using first entry",
                    name
                ),
            }
        }
        self.catalog.first().ok_or(QuoteError::NoMaterials)
    }

    /// Snapshot the current input into an order.
    pub fn order(&self) -> Result<OrderSpec> {
        let material = self.selected_material()?;
        Ok(self.form.to_order(material, self.discount.applied()))
    }

    /// Validate and price the current input.
    pub fn quote(&self) -> Result<(OrderSpec, PriceBreakdown)> {
        let order = self.order()?;
        validate_order(&order).into_result()?;
        let breakdown = self.engine.calculate(&order);
        Ok((order, breakdown))
    }

    /// Price the current input and save it as a variant.
    pub fn save_variant(&mut self, name: Option<String>) -> Result<&Variant> {
        let (order, breakdown) = self.quote()?;
        let mut context =
            VariantContext::new(order.material.name, order.quantity, order.discount_percent);
        context.name = name;
        Ok(self.variants.add(&breakdown, context))
    }

    /// Drop all saved variants.
    pub fn clear_variants(&mut self) {
        self.variants.clear();
    }
}
