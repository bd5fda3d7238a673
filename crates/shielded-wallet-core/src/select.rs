// SPDX-License-Identifier: Apache-2.0
//! Greedy coin selection over the wallet's spendable coins.

use crate::error::{PlanError, Result};
use crate::model::SpendableCoin;

/// Outcome of one selection pass.
#[derive(Clone, Debug)]
pub struct Selection {
    /// Chosen coins, ascending by group id.
    pub coins: Vec<SpendableCoin>,
    pub change_to_mint: i64,
}

/// Total value held in `coins`.
pub fn available_balance(coins: &[SpendableCoin]) -> u64 {
    coins.iter().fold(0u64, |acc, c| acc.saturating_add(c.value))
}

/// Pick a subset of `candidates` whose total covers `required`.
///
/// Value-first greedy: consume the largest remaining coin while it does
/// not overshoot what is still needed; otherwise close the gap with the
/// smallest coin that covers it. Equal-value ties resolve to the coin
/// from the oldest block. Prefers exact and near-exact matches over
/// breaking a much larger coin when a good fit exists.
pub fn select_coins(required: u64, candidates: &[SpendableCoin]) -> Result<Selection> {
    if required > available_balance(candidates) {
        return Err(PlanError::InsufficientFunds);
    }

    // Largest value first; equal values keep the older block in front.
    let mut order: Vec<usize> = (0..candidates.len()).collect();
    order.sort_by(|&a, &b| {
        candidates[b]
            .value
            .cmp(&candidates[a].value)
            .then(candidates[a].block_height.cmp(&candidates[b].block_height))
    });

    // Consumed entries are marked rather than erased so the scan below
    // never invalidates its own ordering.
    let mut consumed = vec![false; candidates.len()];
    let mut accumulated = 0u64;
    let mut chosen: Vec<usize> = Vec::new();

    while accumulated < required {
        let need = required - accumulated;

        let Some(&largest) = order.iter().find(|&&i| !consumed[i]) else {
            break;
        };

        let pick = if candidates[largest].value <= need {
            largest
        } else {
            // Smallest remaining coin still covering `need`. Within an
            // equal-value run only the first, oldest entry is kept.
            let mut best = largest;
            for &i in &order {
                if consumed[i] {
                    continue;
                }
                if candidates[i].value < need {
                    break;
                }
                if candidates[best].value != candidates[i].value {
                    best = i;
                }
            }
            best
        };

        consumed[pick] = true;
        accumulated = accumulated.saturating_add(candidates[pick].value);
        chosen.push(pick);
    }

    let mut coins: Vec<SpendableCoin> =
        chosen.iter().map(|&i| candidates[i].clone()).collect();
    // Downstream proof construction requires ascending group order.
    coins.sort_by_key(|c| c.group_id);

    Ok(Selection {
        coins,
        change_to_mint: accumulated as i64 - required as i64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coin(value: u64, block_height: u64) -> SpendableCoin {
        SpendableCoin {
            commitment: [(value % 251) as u8; 32],
            value,
            serial_k: [1u8; 32],
            diversifier: 0,
            encrypted_diversifier: Vec::new(),
            memo: Vec::new(),
            group_id: 1,
            block_height,
            is_used: false,
        }
    }

    #[test]
    fn takes_smallest_coin_covering_the_gap() {
        let pool = vec![coin(50, 10), coin(30, 11), coin(20, 12)];
        let selection = select_coins(45, &pool).expect("selectable");
        let values: Vec<u64> = selection.coins.iter().map(|c| c.value).collect();
        assert_eq!(values, vec![50]);
        assert_eq!(selection.change_to_mint, 5);
    }

    #[test]
    fn consumes_largest_first_when_it_does_not_overshoot() {
        let pool = vec![coin(10, 1), coin(10, 2), coin(30, 3)];
        let selection = select_coins(40, &pool).expect("selectable");
        let mut values: Vec<u64> = selection.coins.iter().map(|c| c.value).collect();
        values.sort_unstable();
        assert_eq!(values, vec![10, 30]);
        assert_eq!(selection.change_to_mint, 0);
    }

    #[test]
    fn fails_when_pool_cannot_cover_required() {
        let pool = vec![coin(999, 1)];
        let err = select_coins(1000, &pool).unwrap_err();
        assert!(matches!(err, PlanError::InsufficientFunds));
    }

    #[test]
    fn exact_fit_takes_the_largest_coin() {
        let pool = vec![coin(45, 1), coin(7, 2)];
        let selection = select_coins(45, &pool).expect("selectable");
        assert_eq!(selection.coins.len(), 1);
        assert_eq!(selection.coins[0].value, 45);
        assert_eq!(selection.change_to_mint, 0);
    }

    #[test]
    fn equal_value_tie_goes_to_the_oldest_block() {
        let pool = vec![coin(50, 90), coin(50, 20), coin(50, 70)];
        let selection = select_coins(45, &pool).expect("selectable");
        assert_eq!(selection.coins.len(), 1);
        assert_eq!(selection.coins[0].block_height, 20);

        // Same pool, reversed input order: the tie-break must not depend
        // on candidate order.
        let reversed: Vec<SpendableCoin> = pool.into_iter().rev().collect();
        let selection = select_coins(45, &reversed).expect("selectable");
        assert_eq!(selection.coins[0].block_height, 20);
    }

    #[test]
    fn selected_coins_come_back_in_ascending_group_order() {
        let mut a = coin(10, 1);
        a.group_id = 9;
        let mut b = coin(10, 2);
        b.group_id = 3;
        let mut c = coin(10, 3);
        c.group_id = 7;
        let selection = select_coins(30, &[a, b, c]).expect("selectable");
        let groups: Vec<u64> = selection.coins.iter().map(|c| c.group_id).collect();
        assert_eq!(groups, vec![3, 7, 9]);
    }

    #[test]
    fn zero_required_selects_nothing() {
        let pool = vec![coin(10, 1)];
        let selection = select_coins(0, &pool).expect("selectable");
        assert!(selection.coins.is_empty());
        assert_eq!(selection.change_to_mint, 0);
    }
}
