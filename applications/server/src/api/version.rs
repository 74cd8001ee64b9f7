//! API version gate

use crate::error::{Result, ServerError};

/// API versions this server advertises
pub const SUPPORTED_VERSIONS: &[&str] = &["v0"];

/// Check a requested API version against the advertised set
///
/// An absent version is allowed; an unsupported one is a client error whose
/// message carries the offending token verbatim.
pub fn ensure_supported(version: Option<&str>) -> Result<()> {
    match version {
        Some(v) if !SUPPORTED_VERSIONS.contains(&v) => Err(ServerError::BadRequest(format!(
            "unsupported API version: {v}"
        ))),
        _ => Ok(()),
    }
}
