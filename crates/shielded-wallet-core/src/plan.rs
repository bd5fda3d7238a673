//! Spend planning: the fee/selection fixed point and plan assembly.
//!
//! The fee depends on the transaction size, the size on the number of
//! spent coins, and the coin count on the required amount including the
//! fee. [`SpendPlanner::select_with_fee`] resolves the cycle by
//! iteration: the fee only ever rises and the required amount is bounded
//! by the pool, so the loop terminates or fails on insufficient funds.

use std::collections::BTreeMap;

use crate::error::{PlanError, Result};
use crate::fees::FeeEstimator;
use crate::keys::SpendKey;
use crate::mint::tag_script;
use crate::model::{
    BlockHash, CoverSetData, FinalizedPlan, InputPlan, OutputPlan, PrivateRecipient, Recipient,
    SelectionResult, SpendRequest, SpendableCoin,
};
use crate::params::{
    self, CHANGE_DIVERSIFIER, SHIELDED_OUT_LIMIT_PER_TX, SPEND_MINT_SCRIPT_MARKER,
    TRANSPARENT_SPEND_LIMIT,
};
use crate::prover::{CoinRecovery, SpendProver};
use crate::select::select_coins;

/// Orchestrates selection, fee resolution and plan assembly.
pub struct SpendPlanner<R, P> {
    pub recovery: R,
    pub prover: P,
    pub fees: FeeEstimator,
}

impl<R: CoinRecovery, P: SpendProver> SpendPlanner<R, P> {
    pub fn new(recovery: R, prover: P, fees: FeeEstimator) -> Self {
        Self {
            recovery,
            prover,
            fees,
        }
    }

    /// Resolve the fee/selection fixed point.
    ///
    /// When recipients absorb the fee the required amount does not move
    /// with it, so a single selection pass is taken and the first size
    /// estimate is charged.
    pub fn select_with_fee(
        &self,
        required: u64,
        subtract_fee_from_amount: bool,
        coins: &[SpendableCoin],
        num_private_outputs: usize,
    ) -> Result<SelectionResult> {
        let mut fee = self.fees.relay_floor();
        let selection = loop {
            let current_required = if subtract_fee_from_amount {
                required
            } else {
                required
                    .checked_add(fee)
                    .ok_or(PlanError::InsufficientFunds)?
            };

            let selection = select_coins(current_required, coins)?;
            let needed = self
                .fees
                .estimate(selection.coins.len(), num_private_outputs);
            if fee >= needed {
                break selection;
            }
            fee = needed;
            if subtract_fee_from_amount {
                break selection;
            }
        };

        if selection.change_to_mint < 0 {
            return Err(PlanError::InsufficientFunds);
        }

        Ok(SelectionResult {
            coins: selection.coins,
            fee,
            change_to_mint: selection.change_to_mint,
        })
    }

    /// Validate `request`, resolve fee and selection against `coins`, and
    /// hand the assembled bundle to the proving layer.
    ///
    /// Any failure aborts the whole call; no coin is mutated and nothing
    /// partial is returned.
    pub fn plan(
        &self,
        spend_key: &SpendKey,
        request: &SpendRequest,
        coins: &[SpendableCoin],
        cover_sets: &BTreeMap<u64, CoverSetData>,
        block_hashes: &BTreeMap<u64, BlockHash>,
    ) -> Result<FinalizedPlan> {
        if spend_key.is_null() {
            return Err(PlanError::InvalidSpendKey);
        }
        if request.recipients.is_empty() && request.private_recipients.is_empty() {
            return Err(PlanError::InvalidRequest(
                "either recipients or private recipients must be nonempty",
            ));
        }
        if request.private_recipients.len() >= SHIELDED_OUT_LIMIT_PER_TX - 1 {
            return Err(PlanError::InvalidRequest("shielded output limit exceeded"));
        }

        let mut transparent_total = 0u64;
        let mut subtract_fee_recipients = 0u64;
        for recipient in &request.recipients {
            if !params::money_range(recipient.value) {
                return Err(PlanError::InvalidRequest("recipient amount out of range"));
            }
            transparent_total = transparent_total
                .checked_add(recipient.value)
                .ok_or(PlanError::InvalidRequest("recipient amount out of range"))?;
            if recipient.subtract_fee {
                subtract_fee_recipients += 1;
            }
        }

        let mut private_total = 0u64;
        for private in &request.private_recipients {
            private_total = private_total
                .checked_add(private.output.value)
                .ok_or(PlanError::InvalidRequest("recipient amount out of range"))?;
            if private.subtract_fee {
                subtract_fee_recipients += 1;
            }
        }

        if transparent_total > TRANSPARENT_SPEND_LIMIT {
            return Err(PlanError::TransparentLimitExceeded);
        }

        let required = transparent_total
            .checked_add(private_total)
            .ok_or(PlanError::InvalidRequest("recipient amount out of range"))?;
        let selected = self.select_with_fee(
            required,
            subtract_fee_recipients > 0,
            coins,
            request.private_recipients.len(),
        )?;
        let fee = selected.fee;

        let (recipients, private_recipients) =
            apply_fee_split(request, fee, subtract_fee_recipients)?;

        let selected_total = selected
            .coins
            .iter()
            .fold(0u64, |acc, c| acc.saturating_add(c.value));
        let transparent_out = recipients
            .iter()
            .filter(|r| r.value > 0)
            .fold(0u64, |acc, r| acc.saturating_add(r.value));

        let mut residual = selected_total as i128 - fee as i128 - transparent_out as i128;

        let mut outputs: Vec<OutputPlan> = Vec::new();
        for private in &private_recipients {
            if private.output.value == 0 {
                continue;
            }
            residual -= private.output.value as i128;
            outputs.push(private.output.clone());
        }

        if residual < 0 {
            return Err(PlanError::InsufficientFunds);
        }

        // A spend always mints at least one coin: real change, or a
        // zero-valued placeholder when every output is transparent.
        if outputs.is_empty() || residual > 0 {
            let change_address = self
                .recovery
                .derive_address(CHANGE_DIVERSIFIER)
                .map_err(PlanError::Proof)?;
            outputs.push(OutputPlan {
                address: change_address,
                value: residual as u64,
                memo: Vec::new(),
            });
        }

        let (inputs, used_cover_sets, used_block_hashes) =
            self.resolve_inputs(&selected.coins, cover_sets, block_hashes)?;

        let proved = self
            .prover
            .build_spend(
                spend_key,
                &inputs,
                &used_cover_sets,
                &used_block_hashes,
                fee,
                transparent_out,
                &outputs,
            )
            .map_err(PlanError::Proof)?;

        let output_scripts = proved
            .out_coins
            .iter()
            .map(|coin| tag_script(SPEND_MINT_SCRIPT_MARKER, coin))
            .collect();

        Ok(FinalizedPlan {
            fee,
            serialized_spend: proved.serialized_spend,
            output_scripts,
        })
    }

    /// Resolve every selected coin against the caller's cover-set and
    /// block-hash maps and recover its spend authorization. Only groups
    /// actually spent from are forwarded to the prover.
    fn resolve_inputs(
        &self,
        selected: &[SpendableCoin],
        cover_sets: &BTreeMap<u64, CoverSetData>,
        block_hashes: &BTreeMap<u64, BlockHash>,
    ) -> Result<(
        Vec<InputPlan>,
        BTreeMap<u64, CoverSetData>,
        BTreeMap<u64, BlockHash>,
    )> {
        let mut used_cover_sets: BTreeMap<u64, CoverSetData> = BTreeMap::new();
        let mut used_block_hashes: BTreeMap<u64, BlockHash> = BTreeMap::new();
        let mut inputs = Vec::with_capacity(selected.len());

        for coin in selected {
            let group_id = coin.group_id;
            if !used_cover_sets.contains_key(&group_id) {
                let cover_set = cover_sets
                    .get(&group_id)
                    .ok_or(PlanError::MissingCoverSet(group_id))?;
                let block_hash = block_hashes
                    .get(&group_id)
                    .ok_or(PlanError::MissingCoverSet(group_id))?;
                used_cover_sets.insert(group_id, cover_set.clone());
                used_block_hashes.insert(group_id, *block_hash);
            }

            let index = used_cover_sets[&group_id]
                .members
                .iter()
                .position(|member| *member == coin.commitment)
                .ok_or_else(|| PlanError::CoinNotFound {
                    group_id,
                    commitment: hex::encode(coin.commitment),
                })?;

            let authority = self
                .recovery
                .recover_spend_authority(coin)
                .map_err(PlanError::Proof)?;

            inputs.push(InputPlan {
                group_id,
                index: index as u64,
                value: coin.value,
                serial_k: coin.serial_k,
                spend_tag: authority.spend_tag,
                serial_auth: authority.serial_auth,
            });
        }

        Ok((inputs, used_cover_sets, used_block_hashes))
    }
}

/// Spread `fee` equally across all subtract-fee recipients, transparent
/// recipients enumerated before private ones. The division remainder is
/// borne entirely by the first subtract-fee recipient.
fn apply_fee_split(
    request: &SpendRequest,
    fee: u64,
    subtract_fee_recipients: u64,
) -> Result<(Vec<Recipient>, Vec<PrivateRecipient>)> {
    let mut recipients = request.recipients.clone();
    let mut private_recipients = request.private_recipients.clone();
    if subtract_fee_recipients == 0 {
        return Ok((recipients, private_recipients));
    }

    let share = fee / subtract_fee_recipients;
    let mut remainder = Some(fee % subtract_fee_recipients);

    for recipient in recipients.iter_mut().filter(|r| r.subtract_fee) {
        let cut = share + remainder.take().unwrap_or(0);
        recipient.value = recipient
            .value
            .checked_sub(cut)
            .ok_or(PlanError::InsufficientFunds)?;
    }
    for private in private_recipients.iter_mut().filter(|p| p.subtract_fee) {
        let cut = share + remainder.take().unwrap_or(0);
        private.output.value = private
            .output
            .value
            .checked_sub(cut)
            .ok_or(PlanError::InsufficientFunds)?;
    }

    Ok((recipients, private_recipients))
}
