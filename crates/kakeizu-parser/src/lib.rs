//! Parser for the kakeizu input document.
//!
//! The input is line-oriented UTF-8 text: name lines (`ラベル = 表示名`)
//! followed by up to three marker-introduced list sections (guardians,
//! healing priorities, contracts). [`parse`] is a total function: it never
//! fails, whatever the input. Malformed lines are tolerated: a name line
//! without `=` is dropped, a name key that matches no slot is preserved
//! verbatim, and list entries are taken as-is.
//!
//! Full-width variants of the space and equals characters are normalized
//! before any other processing, so `本人　＝　山田光` parses the same as
//! `本人 = 山田光`.

use log::{debug, trace};
use winnow::{Parser, token::rest, token::take_till};

use kakeizu_core::{
    record::ChartRecord,
    schema::{Slot, SlotId},
};

/// Marker prefix opening the guardian section.
const GUARDIAN_MARKER: &str = "◎守護";
/// Marker prefix opening the healing-priority section.
const PRIORITY_MARKER: &str = "◎優先順位";
/// Marker prefix opening the contract section.
const CONTRACT_MARKER: &str = "◎契約";
/// Optional bullet prefix on list entries.
const BULLET: char = '・';

/// Which section of the document the line cursor is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Names,
    Guardians,
    Priorities,
    Contracts,
}

impl Section {
    /// Returns the section opened by a marker line, if the line is one.
    fn from_marker(line: &str) -> Option<Section> {
        if line.starts_with(GUARDIAN_MARKER) {
            Some(Section::Guardians)
        } else if line.starts_with(PRIORITY_MARKER) {
            Some(Section::Priorities)
        } else if line.starts_with(CONTRACT_MARKER) {
            Some(Section::Contracts)
        } else {
            None
        }
    }
}

/// Parses one input document into a [`ChartRecord`].
///
/// Total over any string input: unclassifiable content is either dropped
/// (name lines without `=`) or preserved as opaque entries (unknown name
/// keys, arbitrary list text).
pub fn parse(source: &str) -> ChartRecord {
    let mut record = ChartRecord::new();
    let mut section = Section::Names;

    for raw_line in source.lines() {
        let line = normalize(raw_line);
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        // Section markers switch state and are consumed, not stored.
        if let Some(next) = Section::from_marker(line) {
            trace!(section:? = next; "Entering section");
            section = next;
            continue;
        }

        match section {
            Section::Names => parse_name_line(&mut record, line),
            Section::Guardians => record.push_guardian(list_entry(line)),
            Section::Priorities => record.push_priority(list_entry(line)),
            Section::Contracts => record.push_contract(list_entry(line)),
        }
    }

    debug!(
        unknown_names = record.unknown_names().len(),
        guardians = record.guardians().len(),
        priorities = record.priorities().len(),
        contracts = record.contracts().len();
        "Input document parsed"
    );
    record
}

/// Normalizes full-width space and equals variants to their ASCII forms.
fn normalize(line: &str) -> String {
    line.chars()
        .map(|c| match c {
            '　' => ' ',
            '＝' => '=',
            other => other,
        })
        .collect()
}

/// Splits a name line on the first `=`.
fn name_line<'s>(input: &mut &'s str) -> winnow::Result<(&'s str, &'s str)> {
    let key = take_till(0.., '=').parse_next(input)?;
    '='.parse_next(input)?;
    let value = rest.parse_next(input)?;
    Ok((key, value))
}

fn parse_name_line(record: &mut ChartRecord, line: &str) {
    // A line without `=` is not a name line; it is silently dropped.
    let Ok((key, value)) = name_line.parse(line) else {
        trace!(line; "Dropping non-assignment line in names section");
        return;
    };
    let key = key.trim();
    let value = value.trim().to_string();

    // Resolution order: subject label, canonical label, slot key literal,
    // then verbatim fallback for forward compatibility.
    if key == SlotId::SELF.slot().label() {
        record.set_name(SlotId::SELF, value);
    } else if let Some(slot) = Slot::by_label(key) {
        record.set_name(slot, value);
    } else if let Some(slot) = Slot::by_key(key) {
        record.set_name(slot, value);
    } else {
        record.push_unknown_name(key.to_string(), value);
    }
}

/// Strips an optional leading bullet; the remainder may be empty.
fn list_entry(line: &str) -> String {
    line.strip_prefix(BULLET).unwrap_or(line).to_string()
}
