//! Centroid-based multi-object tracking.
//!
//! Assigns persistent identities to a stream of per-frame bounding-box
//! detections: boxes are reduced to centroids, existing objects are greedily
//! matched to the nearest new centroids, and objects that go unmatched for
//! too many consecutive frames are evicted.

pub mod integration;
pub mod tracker;

pub use integration::{DetectionSource, IntoDetections, PipelineError, TrackerPipeline};
pub use tracker::{
    BoundingBox, Centroid, CentroidTracker, ObjectId, TrackedObject, TrackerConfig, TrackerError,
};
