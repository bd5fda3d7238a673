//! Failure taxonomy for the planning core.

use thiserror::Error;

/// Result type alias that carries [`PlanError`] failures.
pub type Result<T> = std::result::Result<T, PlanError>;

/// Every way a planning call can fail. No recovery is attempted
/// internally; a failure aborts the whole call with no partial effects.
#[derive(Debug, Error)]
pub enum PlanError {
    /// Structurally invalid request: empty recipient sets, over-limit
    /// shielded output count, out-of-range amount.
    #[error("invalid request: {0}")]
    InvalidRequest(&'static str),

    /// Transparent output total exceeds the per-transaction ceiling.
    #[error("transparent spend limit exceeded")]
    TransparentLimitExceeded,

    /// The candidate coins cannot cover the required amount plus fee.
    #[error("insufficient funds")]
    InsufficientFunds,

    /// The spend key equals the protocol null key.
    #[error("spend key is the null key")]
    InvalidSpendKey,

    /// A selected coin's membership group has no caller-supplied cover set
    /// or block hash.
    #[error("no cover set supplied for group {0}")]
    MissingCoverSet(u64),

    /// A selected coin is absent from the cover set it claims membership
    /// in; the caller's chain state is stale or inconsistent.
    #[error("coin {commitment} not found in cover set for group {group_id}")]
    CoinNotFound { group_id: u64, commitment: String },

    /// The proving layer rejected the assembled plan. Propagated opaquely.
    #[error("proving layer rejected the plan: {0}")]
    Proof(anyhow::Error),
}
