//! Integration module for connecting object detection backends with the
//! centroid tracker.
//!
//! Detection itself is out of scope for this crate; these traits are the
//! seam through which any external detector feeds bounding boxes into the
//! tracker, frame by frame.

mod detector;
mod pipeline;

pub use detector::{DetectionSource, IntoDetections};
pub use pipeline::{PipelineError, TrackerPipeline};
