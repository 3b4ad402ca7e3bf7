//! Selection session state machine.
//!
//! [`YearSelectionStore`] owns the in-memory [`YearSelection`] and mirrors it
//! to a [`PreferenceStore`] after every mutation. Two states: uninitialized
//! (no in-memory set yet) and ready. External storage changes are not
//! watched; they take effect on the next [`YearSelectionStore::initialize`].

use tracing::{debug, warn};

use crate::selection::{parse_selection, ParsedSelection, YearSelection, SELECTED_YEARS_KEY};
use crate::store::PreferenceStore;
use crate::types::Year;

/// In-memory selected-years state synchronized with a persistent store.
///
/// All operations are infallible toward the caller: storage failures degrade
/// to memory-only operation with a logged warning, never a propagated error,
/// so the rendering layer always has a set to work with.
pub struct YearSelectionStore<S: PreferenceStore> {
    store: S,
    selection: Option<YearSelection>,
}

impl<S: PreferenceStore> YearSelectionStore<S> {
    /// Create an uninitialized session over the given store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            selection: None,
        }
    }

    /// Load the persisted selection, repairing it if needed.
    ///
    /// - Absent key: adopt the default selection and persist it.
    /// - Valid value: adopt the parsed set; if the canonical serialization
    ///   differs from the raw value (junk tokens, whitespace, leading zeros),
    ///   write the repaired value back so the repair does not recur.
    /// - Invalid value: adopt the default selection, overwriting the bad
    ///   value.
    /// - Storage read failure: adopt the default selection in memory only.
    ///
    /// The returned set is never empty. Calling this again without
    /// intervening toggles yields the same set; after an external clear it
    /// behaves as if no prior value existed.
    pub fn initialize(&mut self) -> YearSelection {
        let selection = match self.store.get(SELECTED_YEARS_KEY) {
            Ok(Some(raw)) => match parse_selection(&raw) {
                ParsedSelection::Valid(selection) => {
                    let canonical = selection.to_storage_string();
                    if canonical != raw {
                        debug!(raw = %raw, repaired = %canonical, "repairing persisted selection");
                        self.persist(&canonical);
                    }
                    selection
                }
                ParsedSelection::Invalid { reason } => {
                    warn!(%reason, "persisted selection invalid, falling back to default");
                    let selection = YearSelection::default();
                    self.persist(&selection.to_storage_string());
                    selection
                }
            },
            Ok(None) => {
                let selection = YearSelection::default();
                self.persist(&selection.to_storage_string());
                selection
            }
            Err(err) => {
                warn!(error = %err, "preference store unavailable, using in-memory default");
                YearSelection::default()
            }
        };

        self.selection = Some(selection.clone());
        selection
    }

    /// Flip `year` in the selection and write the new set through.
    ///
    /// Initializes first if the session has not been initialized yet. The
    /// selection may become empty here; the non-empty invariant binds only
    /// at initialization.
    pub fn toggle_year(&mut self, year: Year) -> &YearSelection {
        if self.selection.is_none() {
            self.initialize();
        }

        let serialized = {
            let selection = self.selection.get_or_insert_with(YearSelection::default);
            selection.toggle(year);
            selection.to_storage_string()
        };
        self.persist(&serialized);

        self.selection.get_or_insert_with(YearSelection::default)
    }

    /// The current selection, if the session has been initialized.
    pub fn selected(&self) -> Option<&YearSelection> {
        self.selection.as_ref()
    }

    /// Whether `year` is selected. `false` before initialization.
    pub fn is_selected(&self, year: Year) -> bool {
        self.selection
            .as_ref()
            .map(|s| s.contains(year))
            .unwrap_or(false)
    }

    pub fn is_ready(&self) -> bool {
        self.selection.is_some()
    }

    /// The underlying preference store.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist(&self, value: &str) {
        if let Err(err) = self.store.set(SELECTED_YEARS_KEY, value) {
            warn!(error = %err, "failed to persist selection, continuing in memory");
        }
    }
}
