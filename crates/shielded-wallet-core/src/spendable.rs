//! Filtering owned coins down to the spendable subset.

use crate::model::SpendableCoin;

#[derive(Clone, Copy, Debug, Default)]
pub struct SpendFilter {
    pub min_confirmations: u64,
    pub min_value: u64,
    pub as_of_height: u64,
}

pub struct SpendableSet;

impl SpendableSet {
    pub fn filter(coins: &[SpendableCoin], f: SpendFilter) -> Vec<SpendableCoin> {
        let mut filtered: Vec<SpendableCoin> = coins
            .iter()
            .filter(|c| {
                let confs = f.as_of_height.saturating_sub(c.block_height) + 1;
                !c.is_used && confs >= f.min_confirmations && c.value >= f.min_value
            })
            .cloned()
            .collect();
        filtered.sort_by_key(|c| (c.block_height, c.group_id));
        filtered
    }
}
