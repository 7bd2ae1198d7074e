//! The parsed chart data model.
//!
//! A [`ChartRecord`] is built once per generation run by the parser crate
//! and then consumed read-only by layout, matching, and page composition.

use log::trace;

use crate::schema::{SLOT_COUNT, SlotId};

/// Data describing one chart: display-name overrides per slot plus the
/// three free-text tag lists.
///
/// Slots without an explicit name fall back to their canonical label via
/// [`display_name`](Self::display_name). Name lines whose key matches no
/// slot are preserved verbatim in [`unknown_names`](Self::unknown_names)
/// rather than rejected.
#[derive(Debug, Clone, Default)]
pub struct ChartRecord {
    names: [Option<String>; SLOT_COUNT],
    unknown_names: Vec<(String, String)>,
    guardians: Vec<String>,
    priorities: Vec<String>,
    contracts: Vec<String>,
}

impl ChartRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the display name for a slot, replacing any earlier value.
    pub fn set_name(&mut self, slot: SlotId, name: String) {
        trace!(key = slot.slot().key(), name; "Setting slot name");
        self.names[slot.index()] = Some(name);
    }

    /// Records a name line whose key matched no slot.
    pub fn push_unknown_name(&mut self, key: String, name: String) {
        self.unknown_names.push((key, name));
    }

    /// Appends an entry to the guardian list.
    pub fn push_guardian(&mut self, entry: String) {
        self.guardians.push(entry);
    }

    /// Appends an entry to the healing-priority list.
    pub fn push_priority(&mut self, entry: String) {
        self.priorities.push(entry);
    }

    /// Appends an entry to the contract list.
    pub fn push_contract(&mut self, entry: String) {
        self.contracts.push(entry);
    }

    /// Returns the explicit name set for a slot, if any.
    pub fn name(&self, slot: SlotId) -> Option<&str> {
        self.names[slot.index()].as_deref()
    }

    /// Returns the display name for a slot, falling back to the slot's
    /// canonical label when no name was provided.
    pub fn display_name(&self, slot: SlotId) -> &str {
        self.name(slot).unwrap_or_else(|| slot.slot().label())
    }

    /// Returns the name lines whose keys matched no slot, in input order.
    pub fn unknown_names(&self) -> &[(String, String)] {
        &self.unknown_names
    }

    /// Returns the guardian list in input order.
    pub fn guardians(&self) -> &[String] {
        &self.guardians
    }

    /// Returns the healing-priority list in input order.
    pub fn priorities(&self) -> &[String] {
        &self.priorities
    }

    /// Returns the contract list in input order.
    pub fn contracts(&self) -> &[String] {
        &self.contracts
    }
}
