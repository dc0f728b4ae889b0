//! Unified error type definition

use thiserror::Error;

// Re-export library error type
pub use proxmox_access_client::ClientError;

/// Module layer error type
#[derive(Error, Debug)]
pub enum ModuleError {
    /// Required parameters missing or contradictory. Raised before any
    /// network call is attempted.
    #[error("parameter validation failed: {0}")]
    Configuration(String),

    /// The single-realm query failed, for whatever reason. The user-facing
    /// message is fixed; the underlying cause stays reachable via
    /// `source()` for diagnostics.
    #[error("Domain '{realm}' does not exist")]
    DomainLookup {
        realm: String,
        #[source]
        source: ClientError,
    },

    /// Client error outside the single-realm path (connect, login, listing),
    /// wrapped with its cause preserved.
    #[error(transparent)]
    Client(#[from] ClientError),
}

impl ModuleError {
    /// Whether it is expected behavior (user input, resource does not exist)
    /// for log-level selection.
    ///
    /// Level `warn` should be used when returning `true`, level `error`
    /// otherwise. **Update this method when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Configuration(_) | Self::DomainLookup { .. } => true,
            Self::Client(e) => e.is_expected(),
        }
    }
}

/// Module layer Result type alias
pub type ModuleResult<T> = std::result::Result<T, ModuleError>;
