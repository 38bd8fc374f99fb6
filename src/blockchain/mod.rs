pub mod block;
pub mod consensus;
pub mod model;
pub mod stats;

pub use block::{Block, difficulty_for_height};
pub use consensus::{BlockValidation, Consensus, run_consensus, validate_block};
pub use model::Simulation;
pub use stats::NetworkStats;

/// Previous-hash sentinel carried by the genesis block: 66 zero characters,
/// the same length as a rendered hash.
pub const GENESIS_PREVIOUS_HASH: &str =
    "000000000000000000000000000000000000000000000000000000000000000000";

/// Upper bound on nonce attempts per block. When the budget is exhausted
/// the block is emitted with the last attempted nonce and will fail its own
/// difficulty check on the next consensus replay.
pub const MAX_NONCE_ATTEMPTS: u64 = 1_000;

/// Blocks mined per difficulty step.
pub const DIFFICULTY_STEP_BLOCKS: u64 = 10;

/// Synthetic per-block contribution to the reported network hashrate.
pub const HASHRATE_PER_BLOCK: u64 = 12_500;

/// Millisecond epoch the synthetic timeline (transaction and contract
/// timestamps) starts from.
pub const SIM_EPOCH_MILLIS: i64 = 1_700_000_000_000;
