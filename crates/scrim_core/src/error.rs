//! Build-time error types

use thiserror::Error;

/// Errors raised while building widgets.
///
/// These are developer-facing integration diagnostics; none of them should
/// reach an end user.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The host creation call did not produce a retrievable widget.
    ///
    /// Fatal to the current build operation. Carries every name issued so
    /// far so the failed creation can be correlated with the host's view.
    #[error("widget creation failed for `{name}`; names issued so far: {issued:?}")]
    CreationFailed {
        /// The name the missing widget was created under.
        name: String,
        /// Diagnostic trail of all names issued by the allocator.
        issued: Vec<String>,
    },

    /// A position, size or color had a component count other than 2 or 3.
    #[error("malformed vector input: expected 2 or 3 components, got {len}")]
    MalformedVector { len: usize },
}

/// Result type for build operations.
pub type Result<T> = std::result::Result<T, BuildError>;
