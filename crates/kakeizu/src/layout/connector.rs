//! Bracket connector routing between a parent couple and their child.
//!
//! The connector is the conventional genealogy bracket: a horizontal bar a
//! fixed gap below the lower of the two parents' node bottoms, a vertical
//! stem dropping from each parent to the bar, and one stem rising from the
//! bar to the child's node top at the child's x.

use kakeizu_core::geometry::Point;

/// A straight line segment of a bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    from: Point,
    to: Point,
}

impl Segment {
    fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    /// Returns the start point of the segment.
    pub fn from(self) -> Point {
        self.from
    }

    /// Returns the end point of the segment.
    pub fn to(self) -> Point {
        self.to
    }
}

/// The routed bracket polyline joining two parents to their child.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    father_stem: Segment,
    mother_stem: Segment,
    bar: Segment,
    riser: Segment,
}

impl Bracket {
    /// Routes a bracket between the parents' node centers and the child's
    /// node center.
    ///
    /// `half_height` is half the node box height, `gap` the drop from the
    /// lower parent bottom to the horizontal bar. If the parents share an
    /// x-coordinate the bar degenerates to a zero-length segment, which is
    /// still valid geometry.
    pub fn route(father: Point, mother: Point, child: Point, half_height: f32, gap: f32) -> Self {
        let father_bottom = father.y() - half_height;
        let mother_bottom = mother.y() - half_height;
        let bar_y = father_bottom.min(mother_bottom) - gap;
        let child_top = child.y() + half_height;

        Self {
            father_stem: Segment::new(
                Point::new(father.x(), father_bottom),
                Point::new(father.x(), bar_y),
            ),
            mother_stem: Segment::new(
                Point::new(mother.x(), mother_bottom),
                Point::new(mother.x(), bar_y),
            ),
            bar: Segment::new(
                Point::new(father.x(), bar_y),
                Point::new(mother.x(), bar_y),
            ),
            riser: Segment::new(
                Point::new(child.x(), bar_y),
                Point::new(child.x(), child_top),
            ),
        }
    }

    /// Returns the four segments in draw order: father stem, mother stem,
    /// bar, child riser.
    pub fn segments(&self) -> [Segment; 4] {
        [self.father_stem, self.mother_stem, self.bar, self.riser]
    }
}
