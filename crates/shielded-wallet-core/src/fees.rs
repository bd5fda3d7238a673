//! Marginal fee estimation for shielded spends.
//!
//! Transaction size is linear in the number of spent coins and shielded
//! outputs, and the network charges one unit per byte, so the fee equals
//! the size. The constants must match the proving layer's serialization
//! or produced transactions will be under- or over-paid.

/// Common proof part: the Schnorr and range proofs.
const BASE_PROOF_SIZE: u64 = 924;
/// Each spent coin adds a one-of-many membership proof plus aux data.
const PER_INPUT_SIZE: u64 = 2535;
/// Each shielded output coin.
const PER_PRIVATE_OUTPUT_SIZE: u64 = 213;
/// Remaining transaction envelope.
const TX_OVERHEAD_SIZE: u64 = 144;

/// Default relay floor, the fixed point's starting fee.
pub const DEFAULT_FEE_PER_KB: u64 = 1000;

/// Fee schedule threaded into the planner. A value, not process state.
#[derive(Clone, Copy, Debug)]
pub struct FeeEstimator {
    /// Minimum relay fee per kilobyte.
    pub fee_per_kb: u64,
}

impl Default for FeeEstimator {
    fn default() -> Self {
        Self {
            fee_per_kb: DEFAULT_FEE_PER_KB,
        }
    }
}

impl FeeEstimator {
    pub fn new(fee_per_kb: u64) -> Self {
        Self { fee_per_kb }
    }

    /// Starting guess for the fee/selection fixed point.
    pub fn relay_floor(&self) -> u64 {
        self.fee_per_kb
    }

    /// Serialized size of a spend with the given shape.
    pub fn tx_size(&self, num_inputs: usize, num_private_outputs: usize) -> u64 {
        BASE_PROOF_SIZE
            + PER_INPUT_SIZE * num_inputs as u64
            + PER_PRIVATE_OUTPUT_SIZE * num_private_outputs as u64
            + TX_OVERHEAD_SIZE
    }

    /// Marginal fee for a spend shape, at one unit per byte.
    pub fn estimate(&self, num_inputs: usize, num_private_outputs: usize) -> u64 {
        self.tx_size(num_inputs, num_private_outputs)
    }
}
