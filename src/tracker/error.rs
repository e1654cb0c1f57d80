use crate::tracker::rect::BoundingBox;

/// Errors returned by the tracker.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TrackerError {
    /// A detection carried a NaN or infinite coordinate.
    #[error("detection {index} has a non-finite coordinate: {bbox:?}")]
    InvalidBox { index: usize, bbox: BoundingBox },
}
