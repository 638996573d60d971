//! Error types for the landing page.
//!
//! Only two things can stop the page from rendering: the site data snapshot
//! could not be fetched or parsed, or the coach field lists failed their
//! startup check. Everything else degrades to defaults.

use thiserror::Error;

/// Failure to obtain the site data snapshot.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),

    /// The server answered with a non-success status.
    #[error("{url} answered with status {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// The body was not valid JSON.
    #[error("site data is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Misconfiguration of the coach profile field lists.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SanitizeError {
    /// A field name is both public and identifying.
    #[error("fields listed as both public and identifying: {fields}")]
    OverlappingFields {
        /// Comma separated offending field names.
        fields: String,
    },
}
