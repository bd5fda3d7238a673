//! Opaque key material handed across the proving boundary.
//!
//! The core never interprets these bytes. It checks the spend key against
//! the protocol null key and passes everything else through.

use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Spend authority for consuming shielded coins.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SpendKey([u8; 32]);

impl SpendKey {
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// The protocol null/identity key, never valid for spending.
    pub fn is_null(&self) -> bool {
        self.0 == [0u8; 32]
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for SpendKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SpendKey(..)")
    }
}

/// Full view key: recovers spend-authorization data for owned coins.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct FullViewKey([u8; 32]);

impl FullViewKey {
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for FullViewKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FullViewKey(..)")
    }
}

/// Incoming view key: identifies received coins and derives addresses.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct IncomingViewKey([u8; 32]);

impl IncomingViewKey {
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for IncomingViewKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("IncomingViewKey(..)")
    }
}
