//! TrackerPipeline for combining detection with tracking.

use crate::tracker::{CentroidTracker, TrackedObject, TrackerConfig, TrackerError};

use super::DetectionSource;

/// Error from a combined detection + tracking step.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError<E> {
    /// The detection backend failed.
    #[error("detection failed: {0}")]
    Detector(E),
    /// The tracker rejected the detections.
    #[error(transparent)]
    Tracker(#[from] TrackerError),
}

/// A combined tracker that bundles detection inference with centroid
/// tracking.
///
/// This struct provides a convenient way to run end-to-end tracking
/// by combining any `DetectionSource` with the `CentroidTracker`.
pub struct TrackerPipeline<D: DetectionSource> {
    detector: D,
    tracker: CentroidTracker,
}

impl<D: DetectionSource> TrackerPipeline<D> {
    /// Create a new tracking pipeline with the given detector and tracker config.
    pub fn new(detector: D, config: TrackerConfig) -> Self {
        Self {
            detector,
            tracker: CentroidTracker::new(config),
        }
    }

    /// Create a new tracking pipeline with default tracker configuration.
    pub fn with_default_config(detector: D) -> Self {
        Self::new(detector, TrackerConfig::default())
    }

    /// Process a single frame and return the current object table.
    ///
    /// Runs detection on the input image, then updates the tracker with
    /// the detected boxes. Returns an owned snapshot of the table.
    pub fn process_frame(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Vec<TrackedObject>, PipelineError<D::Error>> {
        let detections = self
            .detector
            .detect(input, width, height)
            .map_err(PipelineError::Detector)?;
        let objects = self.tracker.update(&detections)?;
        Ok(objects.to_vec())
    }

    /// Get a reference to the underlying detector.
    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Get a mutable reference to the underlying detector.
    pub fn detector_mut(&mut self) -> &mut D {
        &mut self.detector
    }

    /// Get a reference to the underlying tracker.
    pub fn tracker(&self) -> &CentroidTracker {
        &self.tracker
    }

    /// Get a mutable reference to the underlying tracker.
    pub fn tracker_mut(&mut self) -> &mut CentroidTracker {
        &mut self.tracker
    }
}
