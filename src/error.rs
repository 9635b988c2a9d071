//! Error taxonomy for the client.
//!
//! ERROR HANDLING
//! ==============
//! Two classes matter here. Wiring mistakes (a themed component rendered
//! outside the provider) are programmer errors and fail fast. Storage
//! failures are environment errors: they are logged and swallowed, and the
//! theme store degrades to session-only memory.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure talking to durable key-value storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// Storage is disabled, blocked, or not present (SSR, private mode).
    #[error("storage unavailable")]
    Unavailable,

    /// Reading a key failed.
    #[error("storage read failed: {0}")]
    Read(String),

    /// Writing a key failed (quota, security policy).
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Errors surfaced by UI wiring helpers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UiError {
    /// A component asked for the theme store outside `App`'s provider.
    #[error("theme store not provided: render this component inside <App/>")]
    MissingThemeStore,

    /// Durable storage failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}
