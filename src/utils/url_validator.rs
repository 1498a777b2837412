//! Submitted URL validation.
//!
//! Checked before any link write. Only absolute http(s) URLs are accepted;
//! everything else is rejected up front.

use url::Url;

/// Errors that can occur while validating a submitted URL.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,
}

/// Validates that `candidate` is an absolute http(s) URL.
///
/// # Security
///
/// The scheme allow-list rejects `javascript:`, `data:`, `file:` and similar
/// schemes that must never become redirect targets.
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for malformed input and
/// [`UrlValidationError::UnsupportedProtocol`] for non-HTTP(S) schemes.
pub fn validate_url(candidate: &str) -> Result<(), UrlValidationError> {
    let url =
        Url::parse(candidate).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    if url.host_str().is_none() {
        return Err(UrlValidationError::InvalidFormat(
            "URL has no host".to_string(),
        ));
    }

    Ok(())
}

/// Convenience predicate form of [`validate_url`].
pub fn is_valid_url(candidate: &str) -> bool {
    validate_url(candidate).is_ok()
}
