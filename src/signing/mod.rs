//! Remote signing orchestration.

mod service;

pub use service::SigningService;

/// Outcome of a completed sign-and-verify round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SigningResult {
    /// Signature as returned by the provider, `0x`-prefixed hex.
    pub signature: String,
    /// Whether the signature checked out against the wallet's public key.
    pub verified: bool,
}
