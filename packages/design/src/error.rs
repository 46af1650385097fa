use thiserror::Error;

pub type DesignResult<T> = Result<T, DesignError>;

/// Errors raised while reading design data
#[derive(Error, Debug)]
pub enum DesignError {
    #[error("Design node is not an object")]
    NotAnObject,

    #[error("Malformed design node: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Node '{id}' has no bounding box")]
    MissingBoundingBox { id: String },

    #[error("Design file '{0}' not found")]
    FileNotFound(String),

    #[error("Invalid design file URL: {0}")]
    InvalidUrl(String),
}

impl DesignError {
    pub fn missing_bounding_box(id: impl Into<String>) -> Self {
        Self::MissingBoundingBox { id: id.into() }
    }
}
