//! Identity record for a single tracked object.

use crate::tracker::rect::Centroid;

/// Unique object identifier. Monotonically increasing, never reused.
pub type ObjectId = u64;

/// A single tracked object: its identity, last known centroid, and the
/// number of consecutive update calls since it was last matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackedObject {
    /// Unique object identifier
    pub object_id: ObjectId,
    /// Most recently matched centroid
    pub centroid: Centroid,
    /// Consecutive frames since the object was last matched
    pub disappeared: u32,
}

impl TrackedObject {
    pub(crate) fn new(object_id: ObjectId, centroid: Centroid) -> Self {
        Self {
            object_id,
            centroid,
            disappeared: 0,
        }
    }
}
