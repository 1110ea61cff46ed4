//! Editable materials catalog.
//!
//! The catalog lives only as long as the owning session. Names are used for
//! lookup but are not required to be unique; lookups return the first match.

use std::path::Path;

use rust_decimal_macros::dec;

use crate::error::{QuoteError, Result};
use crate::model::MaterialEntry;

/// Ordered list of materials.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaterialsCatalog {
    entries: Vec<MaterialEntry>,
}

impl MaterialsCatalog {
    /// Create a catalog from explicit entries.
    pub fn new(entries: Vec<MaterialEntry>) -> Self {
        Self { entries }
    }

    /// Catalog pre-filled with the shop's standard materials.
    pub fn seed() -> Self {
        Self::new(vec![
            MaterialEntry::new("Sklejka", "Sklejka 3mm", dec!(2.90)),
            MaterialEntry::new("Sklejka", "Sklejka 4mm", dec!(3.40)),
            MaterialEntry::new("Sklejka", "Sklejka 5mm", dec!(4.20)),
            MaterialEntry::new("Sklejka", "Sklejka 6mm", dec!(5.20)),
            MaterialEntry::new("Sklejka", "Sklejka 8-10mm", dec!(8.50)),
            MaterialEntry::new("HDF/MDF", "HDF 3mm", dec!(2.50)),
            MaterialEntry::new("Pleksi", "Pleksi 2-3mm", dec!(3.00)),
            MaterialEntry::new("Pleksi", "Pleksi 4-5mm", dec!(5.00)),
            MaterialEntry::new("Inne", "Filc", dec!(2.50)),
            MaterialEntry::new("Inne", "Papier/Karton", dec!(2.00)),
        ])
    }

    /// Parse a catalog from a JSON array of entries.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: Vec<MaterialEntry> = serde_json::from_str(json)?;
        Ok(Self::new(entries))
    }

    /// Load a catalog from a JSON file. The file is only read.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&content)?;
        tracing::debug!(
            "Loaded {} material(s) from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// All entries in display order.
    pub fn list(&self) -> &[MaterialEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the first entry with the given name.
    pub fn lookup_by_name(&self, name: &str) -> Result<&MaterialEntry> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| QuoteError::MaterialNotFound {
                name: name.to_string(),
            })
    }

    /// Replace the first entry with the same name, or append a new one.
    pub fn upsert(&mut self, entry: MaterialEntry) {
        match self.entries.iter_mut().find(|e| e.name == entry.name) {
            Some(existing) => {
                tracing::info!("Updated material '{}'", entry.name);
                *existing = entry;
            }
            None => {
                tracing::info!("Added material '{}'", entry.name);
                self.entries.push(entry);
            }
        }
    }

    /// Remove the first entry with the given name.
    pub fn remove(&mut self, name: &str) -> Result<MaterialEntry> {
        let idx = self
            .entries
            .iter()
            .position(|e| e.name == name)
            .ok_or_else(|| QuoteError::MaterialNotFound {
                name: name.to_string(),
            })?;
        tracing::info!("Removed material '{}'", name);
        Ok(self.entries.remove(idx))
    }

    /// Append a new row without checking for duplicate names.
    pub fn add_row(&mut self, defaults: MaterialEntry) -> &MaterialEntry {
        tracing::info!("Added material row '{}'", defaults.name);
        self.entries.push(defaults);
        &self.entries[self.entries.len() - 1]
    }

    /// First entry, used as the fallback selection.
    pub fn first(&self) -> Option<&MaterialEntry> {
        self.entries.first()
    }
}
