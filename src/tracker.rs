mod centroid_tracker;
mod error;
mod matching;
mod rect;
mod tracked_object;

pub use centroid_tracker::{CentroidTracker, TrackerConfig};
pub use error::TrackerError;
pub use matching::{AssignmentResult, centroid_distance, greedy_assignment};
pub use rect::{BoundingBox, Centroid};
pub use tracked_object::{ObjectId, TrackedObject};
