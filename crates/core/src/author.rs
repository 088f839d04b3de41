//! Author verification for feedback ownership checks.
//!
//! The caller supplies an author identity with each mutating request. An
//! [`AuthorVerifier`] decides whether that claim matches the identity stored
//! when the record was created. No authentication takes place: the claim is
//! self-reported.

use crate::error::CoreError;

/// Decides whether a caller may modify a record owned by `stored`.
pub trait AuthorVerifier: Send + Sync {
    /// Return `Ok(())` when `claimed` may act as `stored`, otherwise
    /// [`CoreError::Forbidden`].
    fn verify(&self, stored: &str, claimed: Option<&str>) -> Result<(), CoreError>;
}

/// Accepts only an exact, case-sensitive match of the stored identity.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatchVerifier;

impl AuthorVerifier for ExactMatchVerifier {
    fn verify(&self, stored: &str, claimed: Option<&str>) -> Result<(), CoreError> {
        match claimed {
            Some(claimed) if claimed == stored => Ok(()),
            _ => Err(CoreError::Forbidden(
                "You can only modify your own feedback".to_string(),
            )),
        }
    }
}
