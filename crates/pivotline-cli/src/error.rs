use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] pivotline_core::ValidationError),

    #[error(transparent)]
    Pivot(#[from] pivotline_core::PivotError),

    #[error("fetch failed: {0}")]
    Fetch(#[from] pivotline_core::SourceError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Pivot(_) => 3,
            Self::Fetch(_) => 4,
            Self::Serialization(_) | Self::Io(_) => 10,
        }
    }
}
