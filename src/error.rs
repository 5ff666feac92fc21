use crate::segments::SegmentId;
use thiserror::Error;

/// Why a segment rendered empty. Logged, never propagated out of a redraw.
#[derive(Debug, Error)]
pub enum SegmentError {
    #[error("segment `{segment}` failed: {source:#}")]
    Failed {
        segment: SegmentId,
        source: anyhow::Error,
    },

    #[error("segment `{segment}` panicked: {message}")]
    Panicked { segment: SegmentId, message: String },

    #[error("segment `{segment}` is not a push segment")]
    NotPush { segment: SegmentId },
}
