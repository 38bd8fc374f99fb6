use serde::Serialize;

use super::block::{Block, meets_difficulty};
use super::stats::NetworkStats;
use crate::transaction::Transaction;

/// Verdict a replay reaches for one block position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Consensus {
    Agreed,
    Disagreed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockValidation {
    pub block_number: u64,
    pub is_valid: bool,
    pub consensus: Consensus,
    pub timestamp: i64,
}

/// Validate one block against its predecessor and its own recomputed hash:
/// field presence, linkage, sequential numbering, strictly increasing
/// timestamp, hash integrity and the difficulty prefix.
pub fn validate_block(block: &Block, previous: Option<&Block>) -> bool {
    if block.hash.is_empty() || block.timestamp <= 0 {
        return false;
    }
    if let Some(prev) = previous {
        if block.previous_hash != prev.hash {
            return false;
        }
        if block.number != prev.number + 1 {
            return false;
        }
        if block.timestamp <= prev.timestamp {
            return false;
        }
    }
    if block.hash != block.compute_hash() {
        return false;
    }
    meets_difficulty(&block.hash, block.difficulty)
}

/// Replay the whole chain positionally, producing one verdict per block,
/// and recompute the network stats wholesale from the same snapshot. Not
/// incremental: identical input always yields identical output.
pub fn run_consensus(
    blocks: &[Block],
    transactions: &[Transaction],
    active_miners: usize,
) -> (Vec<BlockValidation>, NetworkStats) {
    let verdicts = blocks
        .iter()
        .enumerate()
        .map(|(i, block)| {
            let previous = if i == 0 { None } else { Some(&blocks[i - 1]) };
            let is_valid = validate_block(block, previous);
            BlockValidation {
                block_number: block.number,
                is_valid,
                consensus: if is_valid {
                    Consensus::Agreed
                } else {
                    Consensus::Disagreed
                },
                timestamp: block.timestamp,
            }
        })
        .collect();
    let stats = NetworkStats::compute(blocks, transactions, active_miners);
    (verdicts, stats)
}
