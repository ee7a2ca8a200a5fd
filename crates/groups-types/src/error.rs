//! Error types for the group search system.

use thiserror::Error;

/// Unified error type for group search operations.
///
/// The search core never builds these itself; they come from collaborators
/// and are propagated unchanged.
#[derive(Debug, Error)]
pub enum GroupsError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Backing store error
    #[error("Storage error: {0}")]
    Store(String),

    /// General user search error
    #[error("User search error: {0}")]
    Search(String),

    /// Ownership lookup error
    #[error("Ownership check error: {0}")]
    Ownership(String),

    /// Not found error
    #[error("Not found: {0}")]
    NotFound(String),
}
