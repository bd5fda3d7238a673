//! Boundary traits implemented by the proving and view-key layers.
//!
//! The planner decides which coins and amounts participate; everything
//! that needs curve arithmetic or key material interpretation lives
//! behind these traits.

use std::collections::BTreeMap;

use crate::keys::SpendKey;
use crate::model::{
    Address, BlockHash, CoverSetData, IdentifiedCoin, InputPlan, MintedOutput, OutputPlan,
    SpendableCoin,
};

/// Spend-authorization material recovered for one owned coin.
#[derive(Clone, Debug)]
pub struct RecoveredSpendAuthority {
    pub spend_tag: [u8; 32],
    pub serial_auth: [u8; 32],
}

/// Everything the proving layer produces for a finished spend.
#[derive(Clone, Debug)]
pub struct ProvedSpend {
    pub serialized_spend: Vec<u8>,
    /// Serialized output coins, one per shielded output including change.
    pub out_coins: Vec<Vec<u8>>,
}

/// View-key side of the wallet: recognizes owned coins and recovers the
/// material needed to spend them.
pub trait CoinRecovery {
    /// Decrypt a raw coin with the incoming view key. Fails for coins
    /// that do not belong to this wallet.
    fn identify(&self, raw_coin: &[u8]) -> anyhow::Result<IdentifiedCoin>;

    /// Recover the spend tag and serial authority for an owned coin.
    fn recover_spend_authority(
        &self,
        coin: &SpendableCoin,
    ) -> anyhow::Result<RecoveredSpendAuthority>;

    /// Derive the wallet's receiving address at `diversifier`.
    fn derive_address(&self, diversifier: u64) -> anyhow::Result<Address>;
}

/// Zero-knowledge proving layer. One atomic call per plan: either a
/// complete artifact comes back or the whole plan fails.
pub trait SpendProver {
    #[allow(clippy::too_many_arguments)]
    fn build_spend(
        &self,
        spend_key: &SpendKey,
        inputs: &[InputPlan],
        cover_sets: &BTreeMap<u64, CoverSetData>,
        block_hashes: &BTreeMap<u64, BlockHash>,
        fee: u64,
        transparent_out: u64,
        outputs: &[OutputPlan],
    ) -> anyhow::Result<ProvedSpend>;

    /// Mint fresh coins from transparent funds; returns one serialized
    /// coin per requested output.
    fn build_mint(
        &self,
        outputs: &[MintedOutput],
        serial_context: &[u8],
    ) -> anyhow::Result<Vec<Vec<u8>>>;
}
