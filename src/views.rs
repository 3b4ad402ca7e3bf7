//! Toggle-row projection for the rendering collaborator.
//!
//! The renderer owns buttons for a fixed range of years and marks the
//! selected ones active. This module turns a [`YearSelection`] into that
//! ordered, bounded row set; it never mutates state.

use serde::{Deserialize, Serialize};

use crate::selection::YearSelection;
use crate::types::Year;

/// One renderable toggle control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearToggle {
    pub year: Year,
    pub active: bool,
}

/// Ordered toggle rows over a contiguous year range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearToggleView {
    pub toggles: Vec<YearToggle>,
}

impl YearToggleView {
    /// Project `selection` onto the inclusive range `first..=last`.
    ///
    /// Selected years outside the range are preserved in the selection but
    /// get no row here; an inverted range yields an empty view.
    pub fn project(selection: &YearSelection, first: Year, last: Year) -> Self {
        let toggles = (first..=last)
            .map(|year| YearToggle {
                year,
                active: selection.contains(year),
            })
            .collect();
        Self { toggles }
    }

    /// Years currently marked active, in ascending order.
    pub fn active_years(&self) -> impl Iterator<Item = Year> + '_ {
        self.toggles
            .iter()
            .filter(|t| t.active)
            .map(|t| t.year)
    }
}
