//! Fixed-radius neighbor index.
//!
//! # Query semantics
//!
//! A point `p` is a neighbor of `center` within `radius` iff
//! `|p - center|² < radius²` (strict).  Results are returned as ascending
//! slot indices, so a model that sums over neighbors in result order gets
//! bit-identical totals to a brute-force scan in id order.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use abm_core::Vec2;

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a 2-D `[x, y]` point and its slot in the
/// position snapshot.
#[derive(Clone)]
struct PointEntry {
    point: [f64; 2],
    slot: usize,
}

impl RTreeObject for PointEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for PointEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── NeighborIndex ─────────────────────────────────────────────────────────────

/// Immutable spatial index over one tick's positions.
pub struct NeighborIndex {
    positions: Vec<Vec2>,
    tree: RTree<PointEntry>,
}

impl NeighborIndex {
    /// Bulk-load an index over `positions`; slot `i` is `positions[i]`.
    pub fn build(positions: &[Vec2]) -> Self {
        let entries = positions
            .iter()
            .enumerate()
            .map(|(slot, p)| PointEntry { point: [p.x, p.y], slot })
            .collect();
        Self {
            positions: positions.to_vec(),
            tree: RTree::bulk_load(entries),
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Position stored in `slot`.
    #[inline]
    pub fn position(&self, slot: usize) -> Vec2 {
        self.positions[slot]
    }

    /// Replace the contents of `out` with every slot strictly within
    /// `radius` of `center`, ascending.
    pub fn within(&self, center: Vec2, radius: f64, out: &mut Vec<usize>) {
        out.clear();
        let r2 = radius * radius;
        out.extend(
            self.tree
                .locate_within_distance([center.x, center.y], r2)
                .filter(|e| e.distance_2(&[center.x, center.y]) < r2)
                .map(|e| e.slot),
        );
        out.sort_unstable();
    }

    /// Like [`within`](Self::within) centred on `slot`, excluding `slot`
    /// itself.  Other slots at the same position are still reported.
    pub fn within_excluding(&self, slot: usize, radius: f64, out: &mut Vec<usize>) {
        self.within(self.positions[slot], radius, out);
        out.retain(|&s| s != slot);
    }
}
