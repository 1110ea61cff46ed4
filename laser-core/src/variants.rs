//! Saved quote variants for comparison.

use rust_decimal::Decimal;

use crate::model::{PriceBreakdown, Variant, VariantContext};

/// Length of the generated variant identifier.
const ID_LEN: usize = 8;

/// Prefix for generated variant names.
const DEFAULT_NAME_PREFIX: &str = "Wariant";

/// Ordered list of saved variants. Entries are only ever appended or
/// cleared all at once.
#[derive(Debug, Clone, Default)]
pub struct VariantStore {
    variants: Vec<Variant>,
}

impl VariantStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Save a breakdown as a new variant and return it.
    pub fn add(&mut self, breakdown: &PriceBreakdown, context: VariantContext) -> &Variant {
        let name = match context.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => format!("{} {}", DEFAULT_NAME_PREFIX, self.variants.len() + 1),
        };

        let variant = Variant {
            id: self.next_id(),
            name,
            material_name: context.material_name,
            quantity: context.quantity,
            discount_percent: context.discount_percent,
            unit_final_net: breakdown.unit_final_net,
            services_cost: breakdown.services_cost,
            final_net: breakdown.final_net,
        };

        tracing::info!("Added variant '{}' ({})", variant.name, variant.id);
        self.variants.push(variant);
        &self.variants[self.variants.len() - 1]
    }

    /// Variants in insertion order.
    pub fn list(&self) -> &[Variant] {
        &self.variants
    }

    /// Number of saved variants.
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Check if no variants are saved.
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Sum of unrounded net totals.
    pub fn sum_net(&self) -> Decimal {
        self.variants.iter().map(|v| v.final_net).sum()
    }

    /// Drop all variants.
    pub fn clear(&mut self) {
        tracing::info!("Cleared {} variant(s)", self.variants.len());
        self.variants.clear();
    }

    /// Short random id, regenerated on the rare collision.
    fn next_id(&self) -> String {
        loop {
            let mut id = uuid::Uuid::new_v4().simple().to_string();
            id.truncate(ID_LEN);
            if !self.variants.iter().any(|v| v.id == id) {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn breakdown(final_net: Decimal) -> PriceBreakdown {
        PriceBreakdown {
            final_net,
            services_cost: dec!(30),
            unit_final_net: final_net - dec!(30),
            ..Default::default()
        }
    }

    fn context() -> VariantContext {
        VariantContext::new("Sklejka 3mm", 1, Decimal::ZERO)
    }

    #[test]
    fn test_empty_store() {
        let store = VariantStore::new();
        assert!(store.is_empty());
        assert_eq!(store.sum_net(), Decimal::ZERO);
    }

    #[test]
    fn test_default_names_follow_count() {
        let mut store = VariantStore::new();
        assert_eq!(store.add(&breakdown(dec!(1)), context()).name, "Wariant 1");
        assert_eq!(
            store.add(&breakdown(dec!(2)), context().with_name("Economy")).name,
            "Economy"
        );
        assert_eq!(store.add(&breakdown(dec!(3)), context()).name, "Wariant 3");
    }

    #[test]
    fn test_blank_name_is_generated() {
        let mut store = VariantStore::new();
        let v = store.add(&breakdown(dec!(1)), context().with_name("   "));
        assert_eq!(v.name, "Wariant 1");
    }

    #[test]
    fn test_duplicate_names_allowed() {
        let mut store = VariantStore::new();
        let a = store.add(&breakdown(dec!(1)), context().with_name("X")).id.clone();
        let b = store.add(&breakdown(dec!(1)), context().with_name("X")).id.clone();
        assert_eq!(store.len(), 2);
        assert_ne!(a, b);
        assert_eq!(a.len(), 8);
    }

    #[test]
    fn test_sum_uses_unrounded_values() {
        let mut store = VariantStore::new();
        store.add(&breakdown(dec!(37.752)), context());
        store.add(&breakdown(dec!(10.004)), context());
        store.add(&breakdown(dec!(0.004)), context());
        // 37.75 + 10.00 + 0.00 rounded separately would give 47.75
        assert_eq!(store.sum_net(), dec!(47.760));
    }

    #[test]
    fn test_snapshot_values_copied() {
        let mut store = VariantStore::new();
        let v = store.add(
            &breakdown(dec!(100)),
            VariantContext::new("Filc", 50, dec!(10)),
        );
        assert_eq!(v.material_name, "Filc");
        assert_eq!(v.quantity, 50);
        assert_eq!(v.discount_percent, dec!(10));
        assert_eq!(v.unit_final_net, dec!(70));
        assert_eq!(v.services_cost, dec!(30));
    }

    #[test]
    fn test_clear() {
        let mut store = VariantStore::new();
        store.add(&breakdown(dec!(5)), context());
        store.add(&breakdown(dec!(6)), context());
        store.clear();
        assert!(store.list().is_empty());
        assert_eq!(store.sum_net(), Decimal::ZERO);
        assert_eq!(store.add(&breakdown(dec!(1)), context()).name, "Wariant 1");
    }
}
