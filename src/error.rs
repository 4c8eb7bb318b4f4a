use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The request is well-formed but not allowed, e.g. connecting a product
    /// to itself.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    /// The persistence layer failed. Never swallowed: a lost storage error
    /// can hide a broken group invariant.
    #[error("storage failure: {0}")]
    Storage(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Shorthand for a missing product.
    #[must_use]
    pub fn product_not_found(id: impl Into<i64>) -> Self {
        Self::NotFound {
            entity: "product",
            id: id.into(),
        }
    }

    /// Shorthand for a missing group.
    #[must_use]
    pub fn group_not_found(id: impl Into<i64>) -> Self {
        Self::NotFound {
            entity: "group",
            id: id.into(),
        }
    }

    /// Whether the error came from the persistence layer.
    #[must_use]
    pub fn is_storage_failure(&self) -> bool {
        matches!(self, Self::Storage(_))
    }

    /// Text suitable for an end user of the catalog.
    ///
    /// Storage failures are reported as a retryable update failure without
    /// implying that the catalog is corrupted.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Storage(_) => "could not update alternatives, try again".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<diesel::result::Error> for Error {
    fn from(err: diesel::result::Error) -> Self {
        Error::Storage(err.to_string())
    }
}

impl From<diesel::r2d2::PoolError> for Error {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        Error::Storage(format!("connection pool: {err}"))
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(err: tokio::task::JoinError) -> Self {
        Error::Storage(format!("storage task failed: {err}"))
    }
}
