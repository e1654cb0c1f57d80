//! Main centroid tracking algorithm implementation.

use tracing::debug;

use crate::tracker::error::TrackerError;
use crate::tracker::matching::{self, AssignmentResult};
use crate::tracker::rect::{BoundingBox, Centroid};
use crate::tracker::tracked_object::{ObjectId, TrackedObject};

/// Configuration for the CentroidTracker.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Consecutive frames an object may go unmatched before eviction.
    pub max_disappeared: u32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            max_disappeared: 50,
        }
    }
}

/// Tracks object identities across frames by greedy centroid matching.
///
/// The object table is kept in registration order, which is also ascending
/// id order since ids are monotonic and evicted entries are never re-added.
/// Matching row indices refer to this order within a single `update` call.
pub struct CentroidTracker {
    objects: Vec<TrackedObject>,
    next_object_id: ObjectId,
    config: TrackerConfig,
}

impl CentroidTracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            objects: Vec::new(),
            next_object_id: 0,
            config,
        }
    }

    /// Ingest one frame of detections and return the updated object table.
    ///
    /// The returned slice borrows the tracker's internal state; it reflects
    /// every currently tracked object after this call's registrations,
    /// matches, and evictions, in registration order.
    ///
    /// Rejects the whole frame if any box carries a non-finite coordinate.
    pub fn update(
        &mut self,
        detections: &[BoundingBox],
    ) -> Result<&[TrackedObject], TrackerError> {
        for (index, bbox) in detections.iter().enumerate() {
            if !bbox.is_finite() {
                return Err(TrackerError::InvalidBox { index, bbox: *bbox });
            }
        }

        // No detections this frame: age every object, evict the stale ones.
        if detections.is_empty() {
            for object in &mut self.objects {
                object.disappeared += 1;
            }
            let max_disappeared = self.config.max_disappeared;
            self.objects.retain(|object| {
                if object.disappeared >= max_disappeared {
                    debug!(object_id = object.object_id, "evicting stale object");
                    false
                } else {
                    true
                }
            });
            return Ok(&self.objects);
        }

        let input_centroids: Vec<Centroid> = detections.iter().map(|b| b.centroid()).collect();

        // Nothing tracked yet: register every candidate in input order.
        if self.objects.is_empty() {
            for centroid in input_centroids {
                self.register(centroid);
            }
            return Ok(&self.objects);
        }

        let object_centroids: Vec<Centroid> =
            self.objects.iter().map(|object| object.centroid).collect();

        let dists = matching::centroid_distance(&object_centroids, &input_centroids);
        let AssignmentResult {
            matches,
            unmatched_tracks,
            unmatched_detections,
        } = matching::greedy_assignment(&dists);

        debug!(
            matched = matches.len(),
            unmatched_objects = unmatched_tracks.len(),
            unmatched_detections = unmatched_detections.len(),
            "greedy association"
        );

        for (row, col) in matches {
            let object = &mut self.objects[row];
            object.centroid = input_centroids[col];
            object.disappeared = 0;
        }

        if object_centroids.len() >= input_centroids.len() {
            // At least as many objects as candidates: unmatched objects age,
            // and nothing is registered. When the counts are equal this still
            // holds, so leftover candidates are dropped. Eviction here uses
            // strict `>`, unlike the `>=` in the empty-frame path.
            let max_disappeared = self.config.max_disappeared;
            let mut evicted = Vec::new();
            for &row in &unmatched_tracks {
                let object = &mut self.objects[row];
                object.disappeared += 1;
                if object.disappeared > max_disappeared {
                    evicted.push(object.object_id);
                }
            }
            for object_id in evicted {
                self.unregister(object_id);
            }
        } else {
            for col in unmatched_detections {
                self.register(input_centroids[col]);
            }
        }

        Ok(&self.objects)
    }

    /// All currently tracked objects, in registration order.
    pub fn objects(&self) -> &[TrackedObject] {
        &self.objects
    }

    /// Look up a tracked object by id.
    pub fn get(&self, object_id: ObjectId) -> Option<&TrackedObject> {
        self.objects.iter().find(|o| o.object_id == object_id)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    fn register(&mut self, centroid: Centroid) -> ObjectId {
        let object_id = self.next_object_id;
        self.next_object_id += 1;
        self.objects.push(TrackedObject::new(object_id, centroid));
        debug!(object_id, ?centroid, "registered new object");
        object_id
    }

    fn unregister(&mut self, object_id: ObjectId) {
        let index = self.objects.iter().position(|o| o.object_id == object_id);
        debug_assert!(
            index.is_some(),
            "unregister of unknown object id {object_id}"
        );
        if let Some(index) = index {
            let object = self.objects.remove(index);
            debug!(
                object_id = object.object_id,
                disappeared = object.disappeared,
                "evicting unmatched object"
            );
        }
    }
}
