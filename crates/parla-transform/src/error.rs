use parla_model::ModelError;
use parla_segment::SegmentError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("join needs at least one key column")]
    EmptyJoinKey,

    #[error("join key arity mismatch: {left} left columns, {right} right columns")]
    JoinKeyArity { left: usize, right: usize },

    #[error("sentence segmentation failed for {id}: {source}")]
    Segmentation {
        id: String,
        #[source]
        source: SegmentError,
    },
}

pub type Result<T> = std::result::Result<T, TransformError>;
