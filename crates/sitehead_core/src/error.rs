use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetadataError {
    #[error("invalid input: {field} {reason}")]
    InvalidInput { field: &'static str, reason: String },
    #[error("invalid site origin '{origin}': {reason}")]
    InvalidSiteOrigin { origin: String, reason: String },
}

impl MetadataError {
    pub(crate) fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        MetadataError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}
