//! Line commands for the interactive session.

use std::io::{BufRead, Write};
use std::str::FromStr;

use rust_decimal::Decimal;

use laser_core::report::{format_percent, render_catalog, render_quote, render_variants};
use laser_core::{MaterialEntry, QuoteError, QuoteSession};

pub const HELP: &str = "\
Commands:
  materials                                 list the materials catalog
  select <name>                             choose the material to quote
  add-material <category>;<name>;<price>    append a catalog row
  set-material <category>;<name>;<price>    update a row by name (or append)
  remove-material <name>                    delete a catalog row
  quantity <n>                              pieces (>= 1), re-suggests the discount
  cutting <m>                               cutting line per piece in meters
  engraving <cm2>                           engraving area per piece in cm2
  discount <percent>                        override the discount (0-100)
  setup <fee>                               one-off setup fee
  hours <h>                                 graphic design hours
  rate <r>                                  graphic design hourly rate
  quote                                     show the current quote
  save [name]                               save the current quote as a variant
  variants                                  show saved variants and their sum
  clear                                     remove all saved variants
  quit                                      leave the session
";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Materials,
    Select(String),
    AddMaterial(MaterialEntry),
    SetMaterial(MaterialEntry),
    RemoveMaterial(String),
    Quantity(u32),
    Cutting(Decimal),
    Engraving(Decimal),
    Discount(Decimal),
    Setup(Decimal),
    Hours(Decimal),
    Rate(Decimal),
    Quote,
    Save(Option<String>),
    Variants,
    Clear,
    Quit,
}

/// Result of running a command.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    Output(String),
    Quit,
}

impl FromStr for Command {
    type Err = QuoteError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "help" | "?" => Command::Help,
            "materials" => Command::Materials,
            "select" => Command::Select(required(word, rest)?.to_string()),
            "add-material" => Command::AddMaterial(parse_material(rest)?),
            "set-material" => Command::SetMaterial(parse_material(rest)?),
            "remove-material" => Command::RemoveMaterial(required(word, rest)?.to_string()),
            "quantity" => Command::Quantity(parse_quantity(rest)?),
            "cutting" => Command::Cutting(parse_decimal(word, rest)?),
            "engraving" => Command::Engraving(parse_decimal(word, rest)?),
            "discount" => Command::Discount(parse_decimal(word, rest)?),
            "setup" => Command::Setup(parse_decimal(word, rest)?),
            "hours" => Command::Hours(parse_decimal(word, rest)?),
            "rate" => Command::Rate(parse_decimal(word, rest)?),
            "quote" => Command::Quote,
            "save" => Command::Save((!rest.is_empty()).then(|| rest.to_string())),
            "variants" => Command::Variants,
            "clear" => Command::Clear,
            "quit" | "exit" => Command::Quit,
            _ => return Err(QuoteError::invalid_value("command", "a command (see help)", word)),
        };
        Ok(command)
    }
}

fn required<'a>(field: &str, value: &'a str) -> Result<&'a str, QuoteError> {
    if value.is_empty() {
        Err(QuoteError::invalid_value(field, "a material name", value))
    } else {
        Ok(value)
    }
}

fn parse_decimal(field: &str, value: &str) -> Result<Decimal, QuoteError> {
    Decimal::from_str(value).map_err(|_| QuoteError::invalid_value(field, "a number", value))
}

fn parse_quantity(value: &str) -> Result<u32, QuoteError> {
    match value.parse::<u32>() {
        Ok(quantity) if quantity >= 1 => Ok(quantity),
        _ => Err(QuoteError::invalid_value("quantity", "a whole number >= 1", value)),
    }
}

/// Parse `<category>;<name>;<price>`.
fn parse_material(value: &str) -> Result<MaterialEntry, QuoteError> {
    let invalid = || QuoteError::invalid_value("material", "<category>;<name>;<price>", value);

    let parts: Vec<&str> = value.split(';').map(str::trim).collect();
    let [category, name, price] = parts.as_slice() else {
        return Err(invalid());
    };
    if name.is_empty() {
        return Err(invalid());
    }

    let price = parse_decimal("price", price)?;
    if price < Decimal::ZERO {
        return Err(QuoteError::invalid_value("price", "a price >= 0", price.to_string()));
    }

    Ok(MaterialEntry::new(*category, *name, price))
}

/// Apply a command to the session.
pub fn execute(session: &mut QuoteSession, command: Command) -> laser_core::Result<Outcome> {
    let currency = session.rates().currency.clone();

    let text = match command {
        Command::Help => HELP.to_string(),
        Command::Materials => render_catalog(session.catalog(), &currency),
        Command::Select(name) => {
            let entry = session.select_material(&name)?;
            format!("Selected {}\n", entry.option_label(&currency))
        }
        Command::AddMaterial(entry) => {
            let label = entry.option_label(&currency);
            session.add_material_row(entry);
            format!("Added {}\n", label)
        }
        Command::SetMaterial(entry) => {
            let label = entry.option_label(&currency);
            session.upsert_material(entry);
            format!("Saved {}\n", label)
        }
        Command::RemoveMaterial(name) => {
            let removed = session.remove_material(&name)?;
            format!("Removed {}\n", removed.name)
        }
        Command::Quantity(quantity) => {
            if session.set_quantity(quantity) {
                format!(
                    "Quantity {}, discount set to {}\n",
                    quantity,
                    format_percent(session.discount().applied())
                )
            } else {
                format!("Quantity {}\n", quantity)
            }
        }
        Command::Discount(percent) => {
            session.set_discount(percent);
            format!(
                "Discount {} (suggested {})\n",
                format_percent(percent),
                format_percent(session.discount().suggested())
            )
        }
        Command::Cutting(value) => {
            session.set_cutting_length(value);
            format!("Cutting length {} m\n", value)
        }
        Command::Engraving(value) => {
            session.set_engraving_area(value);
            format!("Engraving area {} cm2\n", value)
        }
        Command::Setup(value) => {
            session.set_setup_fee(value);
            format!("Setup fee {}\n", value)
        }
        Command::Hours(value) => {
            session.set_design_hours(value);
            format!("Design hours {}\n", value)
        }
        Command::Rate(value) => {
            session.set_design_rate(value);
            format!("Design rate {}\n", value)
        }
        Command::Quote => {
            let (order, breakdown) = session.quote()?;
            render_quote(
                &order,
                &breakdown,
                session.discount().suggested(),
                session.rates(),
            )
        }
        Command::Save(name) => {
            let variant = session.save_variant(name)?;
            format!("Saved variant '{}' ({})\n", variant.name, variant.id)
        }
        Command::Variants => render_variants(session.variants(), &currency),
        Command::Clear => {
            session.clear_variants();
            "Cleared variants\n".to_string()
        }
        Command::Quit => return Ok(Outcome::Quit),
    };

    Ok(Outcome::Output(text))
}

/// Read commands line by line until `quit` or end of input. Command errors
/// are reported and the session continues.
pub fn run_session<R: BufRead, W: Write>(
    session: &mut QuoteSession,
    input: R,
    mut output: W,
) -> anyhow::Result<()> {
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match line.parse::<Command>().and_then(|cmd| execute(session, cmd)) {
            Ok(Outcome::Output(text)) => output.write_all(text.as_bytes())?,
            Ok(Outcome::Quit) => break,
            Err(err) => {
                tracing::debug!("Command '{}' failed: {}", line, err);
                writeln!(output, "error: {}", err)?;
            }
        }
        output.flush()?;
    }
    Ok(())
}
