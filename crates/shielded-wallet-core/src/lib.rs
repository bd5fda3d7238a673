//! shielded-wallet-core: spend planning for one-of-many shielded
//! payments.
//!
//! Pieces:
//! - params: protocol money, output and script constants
//! - select: greedy selection over the wallet's spendable coins
//! - fees: linear size model driving the fee/selection fixed point
//! - plan: SpendPlanner, orchestrating selection, fee split and assembly
//! - prover: traits implemented by the zero-knowledge proving layer
//! - mint: recipients that move transparent funds into the shielded pool
//! - spendable: filtering owned coins down to the spendable subset
//!
//! The planner decides which coins and amounts participate in a spend;
//! every cryptographic object crosses this crate as opaque bytes, and
//! proof construction happens behind the `prover` traits.

pub mod error;
pub mod fees;
pub mod keys;
pub mod mint;
pub mod model;
pub mod params;
pub mod plan;
pub mod prover;
pub mod select;
pub mod spendable;

pub use error::{PlanError, Result};
pub use fees::{FeeEstimator, DEFAULT_FEE_PER_KB};
pub use keys::{FullViewKey, IncomingViewKey, SpendKey};
pub use mint::create_mint_recipients;
pub use model::{
    Address, BlockHash, CoinCommitment, CoverSetData, FinalizedPlan, IdentifiedCoin, InputPlan,
    MintedOutput, OutputPlan, PrivateRecipient, Recipient, SelectionResult, SpendRequest,
    SpendableCoin, TxRecipient,
};
pub use plan::SpendPlanner;
pub use prover::{CoinRecovery, ProvedSpend, RecoveredSpendAuthority, SpendProver};
pub use select::{available_balance, select_coins, Selection};
pub use spendable::{SpendFilter, SpendableSet};
