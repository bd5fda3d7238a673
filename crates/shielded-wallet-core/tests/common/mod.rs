//! Mock proving and recovery backends shared by the planner tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::BTreeMap;

use shielded_wallet_core::{
    Address, BlockHash, CoinRecovery, CoverSetData, IdentifiedCoin, InputPlan, MintedOutput,
    OutputPlan, ProvedSpend, RecoveredSpendAuthority, SpendKey, SpendProver, SpendableCoin,
};

/// Snapshot of the arguments the planner handed to `build_spend`.
#[derive(Clone)]
pub struct CapturedSpend {
    pub inputs: Vec<InputPlan>,
    pub groups: Vec<u64>,
    pub fee: u64,
    pub transparent_out: u64,
    pub outputs: Vec<OutputPlan>,
}

/// Deterministic stand-in for the proving/view-key layer. Records the
/// bundle it receives and fabricates stable byte artifacts from it.
#[derive(Default)]
pub struct MockBackend {
    pub captured: RefCell<Option<CapturedSpend>>,
    pub fail_proof: bool,
}

impl CoinRecovery for MockBackend {
    fn identify(&self, raw_coin: &[u8]) -> anyhow::Result<IdentifiedCoin> {
        if raw_coin.len() < 8 {
            anyhow::bail!("coin does not decrypt under this view key");
        }
        let mut value = [0u8; 8];
        value.copy_from_slice(&raw_coin[..8]);
        Ok(IdentifiedCoin {
            value: u64::from_le_bytes(value),
            memo: raw_coin[8..].to_vec(),
            diversifier: 1,
            encrypted_diversifier: vec![0u8; 16],
            serial_k: [7u8; 32],
        })
    }

    fn recover_spend_authority(
        &self,
        coin: &SpendableCoin,
    ) -> anyhow::Result<RecoveredSpendAuthority> {
        // Stable tags derived from the coin so tests can assert
        // pass-through.
        let mut spend_tag = coin.commitment;
        spend_tag[0] ^= 0xaa;
        let mut serial_auth = coin.serial_k;
        serial_auth[0] ^= 0x55;
        Ok(RecoveredSpendAuthority {
            spend_tag,
            serial_auth,
        })
    }

    fn derive_address(&self, diversifier: u64) -> anyhow::Result<Address> {
        let mut bytes = b"addr-".to_vec();
        bytes.extend_from_slice(&diversifier.to_le_bytes());
        Ok(Address(bytes))
    }
}

impl SpendProver for MockBackend {
    fn build_spend(
        &self,
        _spend_key: &SpendKey,
        inputs: &[InputPlan],
        cover_sets: &BTreeMap<u64, CoverSetData>,
        block_hashes: &BTreeMap<u64, BlockHash>,
        fee: u64,
        transparent_out: u64,
        outputs: &[OutputPlan],
    ) -> anyhow::Result<ProvedSpend> {
        if self.fail_proof {
            anyhow::bail!("statement does not verify");
        }
        anyhow::ensure!(
            cover_sets.len() == block_hashes.len(),
            "cover set and block hash maps disagree"
        );

        *self.captured.borrow_mut() = Some(CapturedSpend {
            inputs: inputs.to_vec(),
            groups: cover_sets.keys().copied().collect(),
            fee,
            transparent_out,
            outputs: outputs.to_vec(),
        });

        let mut serialized = Vec::new();
        serialized.extend_from_slice(&fee.to_le_bytes());
        serialized.extend_from_slice(&transparent_out.to_le_bytes());
        for input in inputs {
            serialized.extend_from_slice(&input.group_id.to_le_bytes());
            serialized.extend_from_slice(&input.index.to_le_bytes());
            serialized.extend_from_slice(&input.value.to_le_bytes());
        }
        for output in outputs {
            serialized.extend_from_slice(&output.value.to_le_bytes());
            serialized.extend_from_slice(output.address.as_bytes());
        }

        let out_coins = outputs
            .iter()
            .enumerate()
            .map(|(i, output)| {
                let mut coin = vec![i as u8];
                coin.extend_from_slice(&output.value.to_le_bytes());
                coin
            })
            .collect();

        Ok(ProvedSpend {
            serialized_spend: serialized,
            out_coins,
        })
    }

    fn build_mint(
        &self,
        outputs: &[MintedOutput],
        serial_context: &[u8],
    ) -> anyhow::Result<Vec<Vec<u8>>> {
        Ok(outputs
            .iter()
            .map(|output| {
                let mut coin = serial_context.to_vec();
                coin.extend_from_slice(&output.value.to_le_bytes());
                coin
            })
            .collect())
    }
}

/// Coin factory with a distinct commitment per `tag`.
pub fn coin(value: u64, group_id: u64, block_height: u64, tag: u8) -> SpendableCoin {
    SpendableCoin {
        commitment: [tag; 32],
        value,
        serial_k: [tag.wrapping_add(1); 32],
        diversifier: 1,
        encrypted_diversifier: vec![tag; 8],
        memo: Vec::new(),
        group_id,
        block_height,
        is_used: false,
    }
}

/// Cover-set and block-hash maps containing every coin in `coins`, with a
/// couple of foreign members in front so indices are not trivially zero.
pub fn cover_maps(
    coins: &[SpendableCoin],
) -> (BTreeMap<u64, CoverSetData>, BTreeMap<u64, BlockHash>) {
    let mut cover_sets: BTreeMap<u64, CoverSetData> = BTreeMap::new();
    let mut block_hashes: BTreeMap<u64, BlockHash> = BTreeMap::new();
    for c in coins {
        let entry = cover_sets.entry(c.group_id).or_insert_with(|| CoverSetData {
            members: vec![[0xee; 32], [0xef; 32]],
            representation: c.group_id.to_le_bytes().to_vec(),
        });
        entry.members.push(c.commitment);
        block_hashes.insert(c.group_id, [c.group_id as u8; 32]);
    }
    (cover_sets, block_hashes)
}
