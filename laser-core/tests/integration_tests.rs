//! Integration tests for the quoting workflow.
//!
//! These drive the public API the way a front-end does: pick a material,
//! enter job parameters, read the quote, save variants and clear them.

use laser_core::config::money::approx_eq;
use laser_core::{
    calculate_price, quote_order, suggest_discount, MaterialEntry, MaterialsCatalog, OrderSpec,
    PricingRates, QuoteError, QuoteSession, VariantContext, VariantStore,
};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::io::Write;

fn plywood() -> MaterialEntry {
    MaterialsCatalog::seed()
        .lookup_by_name("Sklejka 3mm")
        .unwrap()
        .clone()
}

// ==================== Pricing scenarios ====================

#[test]
fn test_single_piece_plywood_quote() {
    let b = calculate_price(&OrderSpec::new(plywood(), 1));

    assert_eq!(b.material_unit_cost, dec!(4.002));
    assert_eq!(b.cutting_unit_cost, dec!(3.75));
    assert_eq!(b.unit_base_net, dec!(7.752));
    assert_eq!(b.production_total_net, dec!(7.752));
    assert_eq!(b.discount_amount, Decimal::ZERO);
    assert_eq!(b.production_after_discount, dec!(7.752));
    assert_eq!(b.services_cost, dec!(30));
    assert_eq!(b.final_net, dec!(37.752));
    assert_eq!(b.final_gross, dec!(46.43496));
    assert_eq!(laser_core::report::format_money(b.final_gross, "PLN"), "46.43 PLN");
}

#[test]
fn test_bulk_order_gets_fifteen_percent_on_production_only() {
    let single = calculate_price(&OrderSpec::new(plywood(), 1));

    let mut order = OrderSpec::new(plywood(), 100);
    order.discount_percent = suggest_discount(order.quantity);
    assert_eq!(order.discount_percent, dec!(15));

    let bulk = calculate_price(&order);
    let undiscounted = single.unit_base_net * dec!(100);
    assert_eq!(bulk.production_total_net, undiscounted);
    assert_eq!(bulk.production_after_discount, undiscounted * dec!(0.85));
    assert_eq!(bulk.production_after_discount, dec!(658.92));
    assert_eq!(bulk.services_cost, dec!(30));
    assert_eq!(bulk.final_net, dec!(688.92));
    assert_eq!(bulk.unit_final_net, dec!(6.5892));
}

#[test]
fn test_gross_matches_vat_for_every_seed_material() {
    for material in MaterialsCatalog::seed().list() {
        let mut order = OrderSpec::new(material.clone(), 17);
        order.engraving_area_cm2 = dec!(30);
        order.discount_percent = suggest_discount(17);
        order.design_hours = dec!(0.5);
        let b = calculate_price(&order);
        assert_eq!(b.final_gross, b.final_net * dec!(1.23), "{}", material.name);
        assert!(approx_eq(
            b.unit_final_net * dec!(17),
            b.production_after_discount,
            dec!(0.0000000001)
        ));
    }
}

#[test]
fn test_quote_order_rejects_out_of_range_discount() {
    let mut order = OrderSpec::new(plywood(), 1);
    order.discount_percent = dec!(150);
    let err = quote_order(&order, &PricingRates::default()).unwrap_err();
    assert!(matches!(err, QuoteError::ValidationFailed { .. }));
}

// ==================== Variant comparison ====================

#[test]
fn test_variant_sum_and_clear() {
    let mut store = VariantStore::new();
    let mut expected = Decimal::ZERO;

    for quantity in [1, 10, 55] {
        let mut order = OrderSpec::new(plywood(), quantity);
        order.discount_percent = suggest_discount(quantity);
        let b = calculate_price(&order);
        expected += b.final_net;
        store.add(
            &b,
            VariantContext::new(&order.material.name, quantity, order.discount_percent),
        );
    }

    assert_eq!(store.len(), 3);
    assert_eq!(store.sum_net(), expected);
    let names: Vec<&str> = store.list().iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["Wariant 1", "Wariant 2", "Wariant 3"]);

    store.clear();
    assert!(store.list().is_empty());
    assert_eq!(store.sum_net(), Decimal::ZERO);
}

// ==================== Session workflow ====================

#[test]
fn test_session_workflow() {
    let mut session = QuoteSession::with_seed_catalog();

    let (_, first) = session.quote().unwrap();
    assert_eq!(first.final_net, dec!(37.752));
    session.save_variant(Some("Prototyp".to_string())).unwrap();

    // Quantity change applies the suggestion, manual edit overrides it
    session.set_quantity(60);
    assert_eq!(session.discount().applied(), dec!(10));
    session.set_discount(dec!(12));
    session.set_design_hours(dec!(1));
    let (order, second) = session.quote().unwrap();
    assert_eq!(order.discount_percent, dec!(12));
    assert_eq!(second.services_cost, dec!(130));
    session.save_variant(None).unwrap();

    let variants = session.variants().list();
    assert_eq!(variants[0].name, "Prototyp");
    assert_eq!(variants[1].name, "Wariant 2");
    assert_eq!(variants[1].quantity, 60);
    assert_eq!(session.variants().sum_net(), first.final_net + second.final_net);

    session.clear_variants();
    assert_eq!(session.variants().sum_net(), Decimal::ZERO);
}

#[test]
fn test_session_from_config_files() {
    let mut rates_file = tempfile::NamedTempFile::new().unwrap();
    write!(rates_file, r#"{{"vat_rate": 0.08, "currency": "EUR"}}"#).unwrap();
    let mut catalog_file = tempfile::NamedTempFile::new().unwrap();
    write!(
        catalog_file,
        r#"[{{"category": "Inne", "name": "Korek", "base_unit_price": 10}}]"#
    )
    .unwrap();

    let rates = PricingRates::load(rates_file.path()).unwrap();
    let catalog = MaterialsCatalog::load(catalog_file.path()).unwrap();
    let session = QuoteSession::new(catalog, rates);

    let (order, b) = session.quote().unwrap();
    assert_eq!(order.material.name, "Korek");
    assert_eq!(b.material_unit_cost, dec!(13.8));
    assert_eq!(b.final_gross, b.final_net * dec!(1.08));
    assert_eq!(session.rates().currency, "EUR");
}

#[test]
fn test_invalid_rates_file() {
    let mut rates_file = tempfile::NamedTempFile::new().unwrap();
    write!(rates_file, "vat_rate = 0.08").unwrap();
    let err = PricingRates::load(rates_file.path()).unwrap_err();
    assert!(matches!(err, QuoteError::InvalidConfig { .. }));
}
