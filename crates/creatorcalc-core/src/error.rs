use thiserror::Error;

use crate::platform::Platform;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read profiles file {path}: {source}")]
    ProfilesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse profiles file: {0}")]
    ProfilesFileParse(#[from] serde_yaml::Error),

    #[error("profiles validation failed: {0}")]
    Validation(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaymentError {
    #[error("invalid payment session: {0:?}")]
    InvalidSession(String),

    #[error("payment not confirmed for session {session_id}")]
    NotConfirmed { session_id: String },
}

/// Reasons an engagement rate would be meaningless to present.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngagementInputError {
    #[error("no engagement formula for platform {0}")]
    UnsupportedPlatform(Platform),

    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("{0} must be greater than zero")]
    EmptyAudience(&'static str),
}
