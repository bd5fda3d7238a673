//! Planning data model. Plain values only; cryptographic objects cross
//! this crate as opaque bytes.

use serde::{Deserialize, Serialize};

/// Identity handle for a shielded coin, as serialized by the proving
/// layer. Cover-set membership is byte equality on this handle.
pub type CoinCommitment = [u8; 32];

/// Block hash pinning a cover set to chain state.
pub type BlockHash = [u8; 32];

/// Destination address, opaque to the planner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address(pub Vec<u8>);

impl Address {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// A coin the wallet can spend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpendableCoin {
    pub commitment: CoinCommitment,
    /// Hidden value in smallest units.
    pub value: u64,
    /// Serial/nullifier randomness.
    pub serial_k: [u8; 32],
    /// Diversifier index of the receiving address.
    pub diversifier: u64,
    /// Encrypted diversifier payload.
    pub encrypted_diversifier: Vec<u8>,
    pub memo: Vec<u8>,
    /// Membership group this coin hides in.
    pub group_id: u64,
    pub block_height: u64,
    pub is_used: bool,
}

impl SpendableCoin {
    /// Attach chain metadata to a coin recognized by view-key recovery.
    pub fn from_identified(
        commitment: CoinCommitment,
        identified: IdentifiedCoin,
        group_id: u64,
        block_height: u64,
    ) -> Self {
        Self {
            commitment,
            value: identified.value,
            serial_k: identified.serial_k,
            diversifier: identified.diversifier,
            encrypted_diversifier: identified.encrypted_diversifier,
            memo: identified.memo,
            group_id,
            block_height,
            is_used: false,
        }
    }
}

/// View-key recovery payload for a coin recognized as ours.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IdentifiedCoin {
    pub value: u64,
    pub memo: Vec<u8>,
    pub diversifier: u64,
    pub encrypted_diversifier: Vec<u8>,
    pub serial_k: [u8; 32],
}

/// Transparent recipient.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Recipient {
    pub value: u64,
    /// Absorb a share of the fee instead of the sender paying on top.
    pub subtract_fee: bool,
}

/// Shielded output descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputPlan {
    pub address: Address,
    pub value: u64,
    pub memo: Vec<u8>,
}

/// Shielded recipient.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PrivateRecipient {
    pub output: OutputPlan,
    pub subtract_fee: bool,
}

/// What the planner is asked to pay out.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SpendRequest {
    pub recipients: Vec<Recipient>,
    pub private_recipients: Vec<PrivateRecipient>,
}

/// Per-group public reference data the spend hides in. Caller-supplied.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CoverSetData {
    pub members: Vec<CoinCommitment>,
    /// Opaque representation bound into the proof transcript.
    pub representation: Vec<u8>,
}

/// One selected coin, resolved and authorized, ready for proving.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputPlan {
    pub group_id: u64,
    /// Position of the coin inside its group's cover set.
    pub index: u64,
    pub value: u64,
    pub serial_k: [u8; 32],
    /// Recovered spend tag (`T`).
    pub spend_tag: [u8; 32],
    /// Recovered serial authority (`s`).
    pub serial_auth: [u8; 32],
}

/// Outcome of the fee/selection fixed point.
#[derive(Clone, Debug)]
pub struct SelectionResult {
    /// Chosen coins, ascending by group id.
    pub coins: Vec<SpendableCoin>,
    pub fee: u64,
    /// Leftover of the selection over the required amount. A negative
    /// value is rejected by the planner; this layer never splits a
    /// payment across transactions.
    pub change_to_mint: i64,
}

/// Finished plan, proved and serialized by the external layer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FinalizedPlan {
    pub fee: u64,
    pub serialized_spend: Vec<u8>,
    /// One spend-mint script per produced output coin.
    pub output_scripts: Vec<Vec<u8>>,
}

/// A requested mint output: transparent funds entering the shielded pool.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MintedOutput {
    pub address: Address,
    pub value: u64,
    pub memo: Vec<u8>,
}

/// A finished transaction recipient: script bytes plus carried value.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TxRecipient {
    pub script: Vec<u8>,
    pub value: u64,
    pub subtract_fee: bool,
}
