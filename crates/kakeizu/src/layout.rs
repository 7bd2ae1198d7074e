//! Deterministic slot placement for the tree page.
//!
//! Placement runs in two phases. Rows first: the vertical span between the
//! top and bottom tree margins is split into four equal bands, generation 4
//! on the top edge, each younger generation one band lower, and the subject
//! on the bottom margin. Then columns, outermost generation first: the
//! eight generation-4 couples divide the horizontal span into equal slots
//! ordered right to left, with husband and wife offset symmetrically around
//! each slot center; every younger person's x is the arithmetic mean of
//! their two parents' x. The computation is a single generation-descending
//! pass over a tree of compile-time depth; no iteration or fixed point is
//! needed, and the result depends only on the configuration.

pub mod connector;

use log::debug;

use kakeizu_core::{
    geometry::Point,
    schema::{self, GENERATION_COUNT, SLOT_COUNT, SlotId},
};

use crate::config::ChartConfig;

/// Resolved positions (node centers) for all 31 slots.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeLayout {
    positions: [Point; SLOT_COUNT],
}

impl TreeLayout {
    /// Computes the position of every slot under the given configuration.
    pub fn resolve(config: &ChartConfig) -> Self {
        let page = config.page().size();
        let margins = config.tree().margins();

        let top = page.height() - margins.top();
        let bottom = margins.bottom();
        let band = (top - bottom) / (GENERATION_COUNT - 1) as f32;
        let row = |generation: u8| match generation {
            0 => bottom,
            g => top - (GENERATION_COUNT - 1 - g) as f32 * band,
        };

        let mut positions = [Point::default(); SLOT_COUNT];

        // Generation 4: equal couple slots across the span, rightmost first.
        let gen4 = schema::couples(4);
        let span = page.width() - margins.horizontal_sum();
        let slot_width = span / gen4.len() as f32;
        let spacing = config.tree().couple_spacing();
        for (i, &(husband, wife)) in gen4.iter().enumerate() {
            let center = page.width() - margins.right() - i as f32 * slot_width - slot_width / 2.0;
            positions[husband.index()] = Point::new(center + spacing / 2.0, row(4));
            positions[wife.index()] = Point::new(center - spacing / 2.0, row(4));
        }

        // Generations 3, 2, 1, then the subject: parent-midpoint inheritance.
        // Strictly descending so every input is already resolved.
        for generation in (1..GENERATION_COUNT - 1).rev() {
            for &(husband, wife) in schema::couples(generation) {
                for person in [husband, wife] {
                    let slot = person.slot();
                    let father = positions[slot.father().expect("inner slot").index()];
                    let mother = positions[slot.mother().expect("inner slot").index()];
                    positions[person.index()] =
                        father.midpoint(mother).with_y(row(generation));
                }
            }
        }
        let subject = SlotId::SELF.slot();
        let father = positions[subject.father().expect("subject has parents").index()];
        let mother = positions[subject.mother().expect("subject has parents").index()];
        positions[SlotId::SELF.index()] = father.midpoint(mother).with_y(row(0));

        debug!(slots = SLOT_COUNT; "Tree layout resolved");
        Self { positions }
    }

    /// Returns the resolved center position of a slot.
    pub fn position(&self, slot: SlotId) -> Point {
        self.positions[slot.index()]
    }
}
