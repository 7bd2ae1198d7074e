//! Attribute matching between slot labels and the tag lists.
//!
//! Guardian and priority entries are expected to reproduce a slot's full
//! relational label textually. Matching is whitespace-insensitive but
//! otherwise exact: all whitespace is stripped from both sides, not just
//! trimmed, so an entry like `"父 の 父"` still matches the label
//! `"父の父"`. Partial or synonym matches are not supported.

use crate::record::ChartRecord;

/// Match result for one slot label against a record's tag lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Attributes {
    guardian: bool,
    priority: bool,
}

impl Attributes {
    /// True if the label appears in the guardian list.
    pub fn guardian(self) -> bool {
        self.guardian
    }

    /// True if the label appears in the healing-priority list.
    pub fn priority(self) -> bool {
        self.priority
    }
}

/// Removes every whitespace character, including full-width spaces.
fn squash(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Reports whether the given label appears in the record's guardian and
/// priority lists. Pure and total; O(list length).
pub fn lookup(record: &ChartRecord, label: &str) -> Attributes {
    let clean = squash(label);
    let matches = |entries: &[String]| entries.iter().any(|entry| squash(entry) == clean);

    Attributes {
        guardian: matches(record.guardians()),
        priority: matches(record.priorities()),
    }
}

impl ChartRecord {
    /// Convenience wrapper around [`lookup`].
    pub fn attributes(&self, label: &str) -> Attributes {
        lookup(self, label)
    }
}
