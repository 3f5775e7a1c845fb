use thiserror::Error;

#[derive(Debug, Error)]
pub enum FifoError {
    #[error("capacity {0} must be a power of two between 1 and 65536")]
    InvalidCapacity(usize),

    #[error("threshold {threshold} must be between 1 and the capacity {capacity}")]
    InvalidThreshold { threshold: usize, capacity: usize },

    #[error("file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed stimulus on line {line}: {source}")]
    Stimulus {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("snapshot pointer width does not match its storage of {storage} slots")]
    SnapshotMismatch { storage: usize },
}
