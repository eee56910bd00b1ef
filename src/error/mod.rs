//! Error types for the wallet signing flow.
//!
//! Every failure an orchestrated action can hit maps onto one of these
//! variants; the orchestrators convert them into a single terminal status
//! message, so nothing here ever propagates far enough to crash the process.

use thiserror::Error;

use crate::crypto::CryptoError;

/// Result type alias for flow operations.
pub type FlowResult<T> = Result<T, FlowError>;

/// Failures surfaced by the wallet and signing services.
#[derive(Error, Debug)]
pub enum FlowError {
    /// Failure reported by the external wallet provider (network error,
    /// rejection, rate limit). The payload is the provider's own message
    /// and is shown to the user verbatim, so no prefix is added here.
    #[error("{0}")]
    Provider(String),

    /// Malformed hex input to the codec. Aborts the operation before any
    /// verification is attempted.
    #[error("Invalid hex input: {0}")]
    Decode(String),

    /// The wallet address could not be decoded into a public key. Kept
    /// distinct from a verification-negative result: a broken address is an
    /// infrastructure fault, not a mismatched signature.
    #[error("Invalid wallet address: {0}")]
    AddressFormat(String),
}

impl From<reqwest::Error> for FlowError {
    fn from(err: reqwest::Error) -> Self {
        FlowError::Provider(err.to_string())
    }
}

impl From<CryptoError> for FlowError {
    fn from(err: CryptoError) -> Self {
        match err {
            CryptoError::InvalidSignatureFormat(msg) => FlowError::Decode(msg),
            other => FlowError::AddressFormat(other.to_string()),
        }
    }
}
