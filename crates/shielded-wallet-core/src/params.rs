//! Protocol-wide constants shared by selection, planning and mint building.

/// Smallest currency units per whole coin.
pub const COIN: u64 = 100_000_000;

/// Upper bound on any single amount a transaction may carry.
pub const MAX_MONEY: u64 = 21_000_000 * COIN;

/// Per-transaction ceiling on value leaving the shielded pool.
pub const TRANSPARENT_SPEND_LIMIT: u64 = 10_000 * COIN;

/// Maximum shielded outputs a single transaction may carry. One slot is
/// reserved for the change output.
pub const SHIELDED_OUT_LIMIT_PER_TX: usize = 16;

/// Diversifier reserved for the wallet's own change address.
pub const CHANGE_DIVERSIFIER: u64 = 0x270F;

/// Script marker for a coin minted from transparent funds.
pub const MINT_SCRIPT_MARKER: u8 = 0xd1;

/// Script marker for a coin minted by a shielded spend (recipient outputs
/// and change).
pub const SPEND_MINT_SCRIPT_MARKER: u8 = 0xd2;

/// Whether `value` lies in the protocol money range.
pub fn money_range(value: u64) -> bool {
    value <= MAX_MONEY
}
