//! Builds transaction recipients that move transparent funds into the
//! shielded pool.

use anyhow::anyhow;

use crate::error::{PlanError, Result};
use crate::model::{MintedOutput, TxRecipient};
use crate::params::{self, MINT_SCRIPT_MARKER};
use crate::prover::SpendProver;

/// Wrap freshly minted coins into mint-marker scripts, one recipient per
/// requested output.
pub fn create_mint_recipients<P: SpendProver>(
    prover: &P,
    outputs: &[MintedOutput],
    serial_context: &[u8],
) -> Result<Vec<TxRecipient>> {
    for output in outputs {
        if !params::money_range(output.value) {
            return Err(PlanError::InvalidRequest("mint amount out of range"));
        }
    }

    let coins = prover
        .build_mint(outputs, serial_context)
        .map_err(PlanError::Proof)?;
    if coins.len() != outputs.len() {
        return Err(PlanError::Proof(anyhow!(
            "minted {} coins for {} requested outputs",
            coins.len(),
            outputs.len()
        )));
    }

    Ok(outputs
        .iter()
        .zip(coins)
        .map(|(output, coin)| TxRecipient {
            script: tag_script(MINT_SCRIPT_MARKER, &coin),
            value: output.value,
            subtract_fee: false,
        })
        .collect())
}

/// Prefix serialized coin bytes with a protocol script marker.
pub(crate) fn tag_script(marker: u8, coin: &[u8]) -> Vec<u8> {
    let mut script = Vec::with_capacity(1 + coin.len());
    script.push(marker);
    script.extend_from_slice(coin);
    script
}
