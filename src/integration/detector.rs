//! Trait for object detection inference backends.

use crate::tracker::BoundingBox;

/// Trait for object detection inference backends.
///
/// Implement this trait to connect any detection model to the tracker.
///
/// # Example
///
/// ```ignore
/// use centroidtrack_rs::{BoundingBox, DetectionSource};
///
/// struct MyDetector {
///     // Your model here
/// }
///
/// impl DetectionSource for MyDetector {
///     type Error = std::io::Error;
///
///     fn detect(&mut self, input: &[u8], width: u32, height: u32) -> Result<Vec<BoundingBox>, Self::Error> {
///         // Run inference and return bounding boxes
///         Ok(vec![])
///     }
/// }
/// ```
pub trait DetectionSource {
    /// Error type for detection failures.
    type Error;

    /// Run inference on raw image data and return bounding boxes.
    ///
    /// # Arguments
    /// * `input` - Raw image bytes (format depends on implementation)
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    ///
    /// # Returns
    /// A vector of `BoundingBox` values, or an error.
    fn detect(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Vec<BoundingBox>, Self::Error>;
}

/// Helper trait for converting model-specific outputs to `BoundingBox`.
///
/// Implement this for your model's output format to enable easy conversion.
pub trait IntoDetections {
    /// Convert the output into a vector of bounding boxes.
    fn into_detections(self) -> Vec<BoundingBox>;
}

impl IntoDetections for Vec<BoundingBox> {
    fn into_detections(self) -> Vec<BoundingBox> {
        self
    }
}

impl IntoDetections for Vec<[f32; 4]> {
    fn into_detections(self) -> Vec<BoundingBox> {
        self.into_iter()
            .map(|[x1, y1, x2, y2]| BoundingBox::new(x1, y1, x2, y2))
            .collect()
    }
}
