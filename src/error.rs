use thiserror::Error;

/// Classifies malformed-domain inputs for programmatic matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedKind {
    /// The raw input was empty
    Empty,
    /// A label between dots was empty (leading/trailing dot or consecutive dots)
    EmptyLabel,
}

/// Domain guard error types
#[derive(Error, Debug)]
pub enum DomainGuardError {
    #[error("Malformed domain '{input}'")]
    MalformedDomain {
        kind: MalformedKind,
        input: String,
    },

    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DomainGuardError>;
