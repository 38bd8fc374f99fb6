use serde::Serialize;

use super::HASHRATE_PER_BLOCK;
use super::block::Block;
use crate::transaction::Transaction;

/// Aggregate counters over the current chain and mempool. Recomputed
/// wholesale on every consensus replay, never patched incrementally, so
/// the numbers cannot drift from the source arrays.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NetworkStats {
    pub total_transactions: usize,
    pub pending_transactions: usize,
    pub total_blocks: usize,
    pub network_hashrate: u64,
    pub average_block_time_ms: i64,
    pub active_miners: usize,
}

impl NetworkStats {
    pub fn compute(blocks: &[Block], transactions: &[Transaction], active_miners: usize) -> Self {
        let average_block_time_ms = match (blocks.first(), blocks.last()) {
            (Some(first), Some(last)) if blocks.len() > 1 => {
                (last.timestamp - first.timestamp) / (blocks.len() as i64 - 1)
            }
            _ => 0,
        };
        Self {
            total_transactions: transactions.len(),
            pending_transactions: transactions.iter().filter(|t| t.is_pending()).count(),
            total_blocks: blocks.len(),
            network_hashrate: blocks.len() as u64 * HASHRATE_PER_BLOCK,
            average_block_time_ms,
            active_miners,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NetworkStats;
    use crate::blockchain::{Block, HASHRATE_PER_BLOCK, SIM_EPOCH_MILLIS};
    use crate::transaction::generate_transaction;

    #[test]
    fn empty_simulation_yields_zeroes() {
        let stats = NetworkStats::compute(&[], &[], 4);
        assert_eq!(stats.total_blocks, 0);
        assert_eq!(stats.network_hashrate, 0);
        assert_eq!(stats.average_block_time_ms, 0);
        assert_eq!(stats.active_miners, 4);
    }

    #[test]
    fn counters_follow_the_source_arrays() {
        let genesis = Block::mine_at(&[], None, "0xMiner1", SIM_EPOCH_MILLIS);
        let next = Block::mine_at(&[], Some(&genesis), "0xMiner2", SIM_EPOCH_MILLIS + 3_000);
        let blocks = vec![genesis, next];
        let transactions = vec![
            generate_transaction(0).confirmed_in(0),
            generate_transaction(1),
            generate_transaction(2),
        ];

        let stats = NetworkStats::compute(&blocks, &transactions, 4);
        assert_eq!(stats.total_transactions, 3);
        assert_eq!(stats.pending_transactions, 2);
        assert_eq!(stats.total_blocks, 2);
        assert_eq!(stats.network_hashrate, 2 * HASHRATE_PER_BLOCK);
        assert_eq!(stats.average_block_time_ms, 3_000);
    }
}
