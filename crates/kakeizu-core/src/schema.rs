//! The fixed five-generation relationship schema.
//!
//! A kakeizu chart always covers exactly 31 positions: the subject plus
//! every ancestor up to the great-great-grandparents. The positions form a
//! complete binary tree of depth 4 rooted at the subject, laid out here as
//! a compile-time constant table in heap order (parents of the slot at
//! index `i` sit at `2i + 1` and `2i + 2`).
//!
//! The table is ordered subject-first, then by ascending generation, which
//! is also the order the record pages are emitted in.

/// Number of slots in the schema.
pub const SLOT_COUNT: usize = 31;

/// Number of generations covered, subject included.
pub const GENERATION_COUNT: u8 = 5;

/// Presentation gender of a slot, controlling the node shape on the tree
/// page (rectangle for male, ellipse for female).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

/// Index of one slot in the relationship table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(u8);

impl SlotId {
    /// The subject of the chart.
    pub const SELF: SlotId = SlotId(0);

    /// Returns the position of this slot in the schema table.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterates over every slot id in table order (subject first, then by
    /// ascending generation).
    pub fn all() -> impl Iterator<Item = SlotId> {
        (0..SLOT_COUNT as u8).map(SlotId)
    }

    /// Returns the slot record for this id.
    pub fn slot(self) -> &'static Slot {
        &SLOTS[self.0 as usize]
    }
}

/// One fixed position in the five-generation schema.
#[derive(Debug)]
pub struct Slot {
    key: &'static str,
    generation: u8,
    father: Option<SlotId>,
    mother: Option<SlotId>,
    label: &'static str,
    gender: Gender,
}

impl Slot {
    /// Returns the symbolic key of the slot (`"self"`, `"ff"`, `"mmmf"`, ...).
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Returns the generation depth, 0 for the subject up to 4 for the
    /// earliest ancestors.
    pub fn generation(&self) -> u8 {
        self.generation
    }

    /// Returns the father slot, absent for generation 4.
    pub fn father(&self) -> Option<SlotId> {
        self.father
    }

    /// Returns the mother slot, absent for generation 4.
    pub fn mother(&self) -> Option<SlotId> {
        self.mother
    }

    /// Returns the canonical display label of the relation.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Returns the presentation gender of the slot.
    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// Looks up a slot id by its symbolic key.
    pub fn by_key(key: &str) -> Option<SlotId> {
        SlotId::all().find(|id| id.slot().key == key)
    }

    /// Looks up a slot id by its canonical label.
    pub fn by_label(label: &str) -> Option<SlotId> {
        SlotId::all().find(|id| id.slot().label == label)
    }
}

const fn inner(
    key: &'static str,
    generation: u8,
    father: u8,
    mother: u8,
    label: &'static str,
    gender: Gender,
) -> Slot {
    Slot {
        key,
        generation,
        father: Some(SlotId(father)),
        mother: Some(SlotId(mother)),
        label,
        gender,
    }
}

const fn root(key: &'static str, label: &'static str, gender: Gender) -> Slot {
    Slot {
        key,
        generation: 4,
        father: None,
        mother: None,
        label,
        gender,
    }
}

use Gender::{Female, Male};

/// The full relationship table, heap-ordered.
static SLOTS: [Slot; SLOT_COUNT] = [
    inner("self", 0, 1, 2, "本人", Male),
    inner("father", 1, 3, 4, "父", Male),
    inner("mother", 1, 5, 6, "母", Female),
    inner("ff", 2, 7, 8, "父の父", Male),
    inner("fm", 2, 9, 10, "父の母", Female),
    inner("mf", 2, 11, 12, "母の父", Male),
    inner("mm", 2, 13, 14, "母の母", Female),
    inner("fff", 3, 15, 16, "父の父の父", Male),
    inner("ffm", 3, 17, 18, "父の父の母", Female),
    inner("fmf", 3, 19, 20, "父の母の父", Male),
    inner("fmm", 3, 21, 22, "父の母の母", Female),
    inner("mff", 3, 23, 24, "母の父の父", Male),
    inner("mfm", 3, 25, 26, "母の父の母", Female),
    inner("mmf", 3, 27, 28, "母の母の父", Male),
    inner("mmm", 3, 29, 30, "母の母の母", Female),
    root("ffff", "父の父の父の父", Male),
    root("fffm", "父の父の父の母", Female),
    root("ffmf", "父の父の母の父", Male),
    root("ffmm", "父の父の母の母", Female),
    root("fmff", "父の母の父の父", Male),
    root("fmfm", "父の母の父の母", Female),
    root("fmmf", "父の母の母の父", Male),
    root("fmmm", "父の母の母の母", Female),
    root("mfff", "母の父の父の父", Male),
    root("mffm", "母の父の父の母", Female),
    root("mfmf", "母の父の母の父", Male),
    root("mfmm", "母の父の母の母", Female),
    root("mmff", "母の母の父の父", Male),
    root("mmfm", "母の母の父の母", Female),
    root("mmmf", "母の母の母の父", Male),
    root("mmmm", "母の母の母の母", Female),
];

/// Couple tables per generation, husband first. The generation-4 couples
/// are listed in the order they are laid out on the page, rightmost first.
static COUPLES_GEN1: [(SlotId, SlotId); 1] = [(SlotId(1), SlotId(2))];
static COUPLES_GEN2: [(SlotId, SlotId); 2] = [(SlotId(3), SlotId(4)), (SlotId(5), SlotId(6))];
static COUPLES_GEN3: [(SlotId, SlotId); 4] = [
    (SlotId(7), SlotId(8)),
    (SlotId(9), SlotId(10)),
    (SlotId(11), SlotId(12)),
    (SlotId(13), SlotId(14)),
];
static COUPLES_GEN4: [(SlotId, SlotId); 8] = [
    (SlotId(15), SlotId(16)),
    (SlotId(17), SlotId(18)),
    (SlotId(19), SlotId(20)),
    (SlotId(21), SlotId(22)),
    (SlotId(23), SlotId(24)),
    (SlotId(25), SlotId(26)),
    (SlotId(27), SlotId(28)),
    (SlotId(29), SlotId(30)),
];

/// Returns the parent couples of the given generation (1 to 4).
///
/// # Panics
///
/// Panics for generation 0 (the subject is nobody's parent here) or any
/// value outside the schema depth.
pub fn couples(generation: u8) -> &'static [(SlotId, SlotId)] {
    match generation {
        1 => &COUPLES_GEN1,
        2 => &COUPLES_GEN2,
        3 => &COUPLES_GEN3,
        4 => &COUPLES_GEN4,
        _ => panic!("no couples at generation {generation}"),
    }
}

/// Finds the slot whose parents are exactly the given couple.
pub fn child_of(father: SlotId, mother: SlotId) -> Option<SlotId> {
    SlotId::all().find(|id| {
        let slot = id.slot();
        slot.father == Some(father) && slot.mother == Some(mother)
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_table_size_and_self_slot() {
        assert_eq!(SlotId::all().count(), SLOT_COUNT);
        assert_eq!(SlotId::SELF.slot().key(), "self");
        assert_eq!(SlotId::SELF.slot().label(), "本人");
        assert_eq!(SlotId::SELF.slot().generation(), 0);
    }

    #[test]
    fn test_keys_and_labels_are_unique() {
        let keys: HashSet<_> = SlotId::all().map(|id| id.slot().key()).collect();
        let labels: HashSet<_> = SlotId::all().map(|id| id.slot().label()).collect();
        assert_eq!(keys.len(), SLOT_COUNT);
        assert_eq!(labels.len(), SLOT_COUNT);
    }

    #[test]
    fn test_parents_present_below_last_generation() {
        for id in SlotId::all() {
            let slot = id.slot();
            if slot.generation() < GENERATION_COUNT - 1 {
                let father = slot.father().expect("missing father").slot();
                let mother = slot.mother().expect("missing mother").slot();
                assert_eq!(father.generation(), slot.generation() + 1);
                assert_eq!(mother.generation(), slot.generation() + 1);
                assert_eq!(father.gender(), Gender::Male);
                assert_eq!(mother.gender(), Gender::Female);
            } else {
                assert!(slot.father().is_none());
                assert!(slot.mother().is_none());
            }
        }
    }

    #[test]
    fn test_tree_is_complete() {
        // Every non-subject slot must be reachable as the parent of exactly
        // one slot: 31 nodes, 15 couples, one child each.
        let mut seen = HashSet::new();
        for generation in 1..GENERATION_COUNT {
            for &(husband, wife) in couples(generation) {
                assert_eq!(husband.slot().generation(), generation);
                assert_eq!(wife.slot().generation(), generation);
                let child = child_of(husband, wife).expect("childless couple");
                assert_eq!(child.slot().generation(), generation - 1);
                assert!(seen.insert(child), "couple shares a child");
            }
        }
        assert_eq!(seen.len(), 15);
    }

    #[test]
    fn test_generation_counts() {
        let counts = [1, 2, 4, 8, 16];
        for (generation, &expected) in counts.iter().enumerate() {
            let actual = SlotId::all()
                .filter(|id| id.slot().generation() == generation as u8)
                .count();
            assert_eq!(actual, expected, "generation {generation}");
        }
    }

    #[test]
    fn test_table_order_is_subject_first_then_by_generation() {
        let generations: Vec<u8> = SlotId::all().map(|id| id.slot().generation()).collect();
        assert!(generations.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(generations[0], 0);
    }

    #[test]
    fn test_lookup_by_key_and_label() {
        let ff = Slot::by_key("ff").expect("known key");
        assert_eq!(ff.slot().label(), "父の父");
        assert_eq!(Slot::by_label("父の父"), Some(ff));
        assert_eq!(Slot::by_key("grandpa"), None);
        assert_eq!(Slot::by_label("祖父"), None);
    }

    #[test]
    fn test_child_of_rejects_non_couples() {
        let fff = Slot::by_key("fff").unwrap();
        let mmm = Slot::by_key("mmm").unwrap();
        assert_eq!(child_of(fff, mmm), None);
    }
}
