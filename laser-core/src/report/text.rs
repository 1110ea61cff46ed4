//! Plain text tables.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::catalog::MaterialsCatalog;
use crate::config::{money, PricingRates};
use crate::model::{OrderSpec, PriceBreakdown};
use crate::variants::VariantStore;

/// Gap between table columns.
const COLUMN_GAP: &str = "  ";

/// Width of the label column in the quote summary.
const LABEL_WIDTH: usize = 24;

#[derive(Debug, Clone, Copy)]
enum Align {
    Left,
    Right,
}

/// Format an amount with two decimals and the currency suffix.
pub fn format_money(value: Decimal, currency: &str) -> String {
    format!("{} {}", money::format_amount(value), currency)
}

/// Format a percentage with one decimal, e.g. `15.0%`.
pub fn format_percent(percent: Decimal) -> String {
    let rounded = percent.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.1}%", rounded)
}

/// Render the price summary for a single order.
pub fn render_quote(
    order: &OrderSpec,
    breakdown: &PriceBreakdown,
    suggested_discount: Decimal,
    rates: &PricingRates,
) -> String {
    let currency = rates.currency.as_str();
    let lines = [
        ("Material", order.material.option_label(currency)),
        ("Quantity", order.quantity.to_string()),
        (
            "Discount",
            format!(
                "{} (suggested {})",
                format_percent(order.discount_percent),
                format_percent(suggested_discount)
            ),
        ),
        (
            "Unit price (net)",
            format_money(breakdown.unit_final_net, currency),
        ),
        (
            "Discount amount",
            format!("-{}", format_money(breakdown.discount_amount, currency)),
        ),
        ("Services", format_money(breakdown.services_cost, currency)),
        ("TOTAL (net)", format_money(breakdown.final_net, currency)),
        (
            "VAT",
            format!(
                "{} ({}%)",
                format_money(breakdown.vat_amount(), currency),
                rates.vat_percent()
            ),
        ),
        (
            "",
            format!(
                "Gross ({}% VAT): {}",
                rates.vat_percent(),
                format_money(breakdown.final_gross, currency)
            ),
        ),
    ];

    let mut out = String::new();
    for (label, value) in lines {
        let line = format!("{:<width$}{}", label, value, width = LABEL_WIDTH);
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Render the saved variants as a comparison table with the aggregate sum.
pub fn render_variants(store: &VariantStore, currency: &str) -> String {
    if store.is_empty() {
        return "No saved variants.\n".to_string();
    }

    let headers = [
        ("Name", Align::Left),
        ("Material", Align::Left),
        ("Qty", Align::Right),
        ("Discount", Align::Right),
        ("Unit net", Align::Right),
        ("Services", Align::Right),
        ("Total net", Align::Right),
    ];

    let rows: Vec<Vec<String>> = store
        .list()
        .iter()
        .map(|v| {
            vec![
                v.name.clone(),
                v.material_name.clone(),
                v.quantity.to_string(),
                format_percent(v.discount_percent),
                format_money(v.unit_final_net, currency),
                format_money(v.services_cost, currency),
                format_money(v.final_net, currency),
            ]
        })
        .collect();

    let mut out = render_table(&headers, &rows);
    out.push_str(&format!(
        "Total of all variants: {} net\n",
        format_money(store.sum_net(), currency)
    ));
    out
}

/// Render the materials catalog with 1-based row numbers.
pub fn render_catalog(catalog: &MaterialsCatalog, currency: &str) -> String {
    let headers = [
        ("#", Align::Right),
        ("Category", Align::Left),
        ("Name", Align::Left),
        ("Base price", Align::Right),
    ];

    let rows: Vec<Vec<String>> = catalog
        .list()
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            vec![
                (idx + 1).to_string(),
                entry.category.clone(),
                entry.name.clone(),
                format_money(entry.base_unit_price, currency),
            ]
        })
        .collect();

    let mut out = render_table(&headers, &rows);
    out.push_str("Prices are net per sheet/base unit. Edits are kept until the program exits.\n");
    out
}

fn render_table(headers: &[(&str, Align)], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|(h, _)| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header_cells: Vec<String> = headers.iter().map(|(h, _)| h.to_string()).collect();
    let aligns: Vec<Align> = headers.iter().map(|(_, a)| *a).collect();

    let mut out = String::new();
    push_row(&mut out, &header_cells, &aligns, &widths);
    let rule_len = widths.iter().sum::<usize>() + COLUMN_GAP.len() * (widths.len() - 1);
    out.push_str(&"-".repeat(rule_len));
    out.push('\n');
    for row in rows {
        push_row(&mut out, row, &aligns, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String], aligns: &[Align], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(aligns)
        .zip(widths)
        .map(|((cell, align), width)| match align {
            Align::Left => format!("{:<width$}", cell, width = *width),
            Align::Right => format!("{:>width$}", cell, width = *width),
        })
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    out.push_str(line.trim_end());
    out.push('\n');
}
