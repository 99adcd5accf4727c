use thiserror::Error;

/// A DOM side effect could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetError {
    #[error("list header root element is not mounted")]
    RootMissing,
    #[error("search input is not mounted")]
    InputMissing,
    #[error("DOM call failed: {0}")]
    Dom(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid list header config: {0}")]
    Json(#[from] serde_json::Error),
}
