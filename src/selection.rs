//! Year selection set and persisted-value codec.
//!
//! The persisted value is a single comma-separated string of decimal years
//! stored under [`SELECTED_YEARS_KEY`]. Parsing is tolerant: tokens that fail
//! integer conversion are dropped individually, and a value with no usable
//! tokens is rejected as a whole so callers can repair it.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Year;

/// Storage key for the persisted selection.
pub const SELECTED_YEARS_KEY: &str = "selectedYears";

/// Fallback selection used whenever no valid persisted value exists.
pub const DEFAULT_SELECTION: [Year; 3] = [2022, 2023, 2024];

/// Set of years currently toggled on.
///
/// Semantically unordered; backed by a `BTreeSet` so serialization is
/// deterministic (ascending). Equality is set equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearSelection {
    years: BTreeSet<Year>,
}

impl YearSelection {
    /// An empty selection.
    pub fn empty() -> Self {
        Self {
            years: BTreeSet::new(),
        }
    }

    /// Build a selection from an iterator of years. Duplicates collapse.
    pub fn from_years<I: IntoIterator<Item = Year>>(years: I) -> Self {
        Self {
            years: years.into_iter().collect(),
        }
    }

    /// Whether `year` is currently selected.
    pub fn contains(&self, year: Year) -> bool {
        self.years.contains(&year)
    }

    /// Flip `year`: remove it if selected, add it otherwise.
    ///
    /// Returns `true` if the year is selected after the toggle.
    pub fn toggle(&mut self, year: Year) -> bool {
        if self.years.remove(&year) {
            false
        } else {
            self.years.insert(year);
            true
        }
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Years in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Year> + '_ {
        self.years.iter().copied()
    }

    /// Canonical persisted form: ascending decimal years joined by `,` with
    /// no surrounding whitespace and no leading zeros. An empty selection
    /// serializes to the empty string.
    pub fn to_storage_string(&self) -> String {
        let mut out = String::new();
        for (i, year) in self.years.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push_str(&year.to_string());
        }
        out
    }
}

impl Default for YearSelection {
    /// The default selection is [`DEFAULT_SELECTION`], not the empty set.
    fn default() -> Self {
        Self::from_years(DEFAULT_SELECTION)
    }
}

impl fmt::Display for YearSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_storage_string())
    }
}

/// Outcome of parsing a persisted value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedSelection {
    /// At least one token parsed to a year.
    Valid(YearSelection),
    /// Nothing usable; the stored value should be repaired.
    Invalid { reason: String },
}

/// Parse a persisted `selectedYears` value.
///
/// Splits on `,`, trims each token, and keeps the tokens that parse as
/// decimal integers. A value that yields no years at all is `Invalid` —
/// "valid" means "parses to at least one integer".
pub fn parse_selection(raw: &str) -> ParsedSelection {
    let mut years = BTreeSet::new();
    for token in raw.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        if let Ok(year) = token.parse::<Year>() {
            years.insert(year);
        }
    }

    if years.is_empty() {
        ParsedSelection::Invalid {
            reason: format!("no usable year tokens in {:?}", raw),
        }
    } else {
        ParsedSelection::Valid(YearSelection { years })
    }
}
