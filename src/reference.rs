//! Country→currency reference data.
//!
//! The table is immutable for the lifetime of the process and injected
//! into consumers, never reached through ambient globals. A builtin table
//! ships with the crate; callers may supply their own.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// One row of the reference table. Country names are unique within a table.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountryCurrencyEntry {
    pub name: String,
    /// ISO-style currency code.
    pub currency: String,
}

/// Ordered, read-only lookup table mapping country names to currency codes.
#[derive(Clone, Debug)]
pub struct CountryCurrencyTable {
    entries: Vec<CountryCurrencyEntry>,
}

static BUILTIN: LazyLock<CountryCurrencyTable> = LazyLock::new(|| {
    CountryCurrencyTable::from_json(include_str!("../data/countries.json"))
        .expect("embedded country table is well-formed")
});

impl CountryCurrencyTable {
    pub fn new(entries: Vec<CountryCurrencyEntry>) -> Self {
        Self { entries }
    }

    /// Parses a table from a JSON array of `{name, currency}` rows.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::new(serde_json::from_str(raw)?))
    }

    /// The table shipped with the crate, parsed once per process.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    pub fn entries(&self) -> &[CountryCurrencyEntry] {
        &self.entries
    }

    /// All entries whose name starts with `prefix`, case-insensitively,
    /// preserving table order. An empty prefix returns the full table.
    pub fn search(&self, prefix: &str) -> Vec<&CountryCurrencyEntry> {
        let needle = prefix.trim().to_lowercase();
        self.entries
            .iter()
            .filter(|entry| entry.name.to_lowercase().starts_with(&needle))
            .collect()
    }

    /// Currency code for an exact country name, matched case-insensitively.
    pub fn resolve_currency(&self, name: &str) -> Option<&str> {
        let needle = name.trim();
        self.entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(needle))
            .map(|entry| entry.currency.as_str())
    }
}
