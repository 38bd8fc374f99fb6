use std::collections::HashSet;

use log::{debug, info};

use super::block::Block;
use super::consensus::{BlockValidation, run_consensus};
use super::stats::NetworkStats;
use crate::contract::{ContractDescriptor, SmartContract, deploy};
use crate::miner;
use crate::transaction::{Transaction, generate_transaction};

/// The whole simulated network: the chain, the transaction history, the
/// contract registry, and the verdicts/stats of the latest replay.
#[derive(Debug, Default)]
pub struct Simulation {
    pub blocks: Vec<Block>,
    pub transactions: Vec<Transaction>,
    pub contracts: Vec<SmartContract>,
    pub validations: Vec<BlockValidation>,
    pub stats: NetworkStats,
    next_tx_index: u64,
    next_contract_index: u64,
}

impl Simulation {
    /// Start with an empty chain; the first `tick` mines genesis.
    pub fn new() -> Self {
        let mut sim = Self::default();
        sim.stats = NetworkStats::compute(&sim.blocks, &sim.transactions, miner::count());
        sim
    }

    /// Advance the simulation one step: admit one synthetic transaction,
    /// mine the pending set into a block, confirm the included entries,
    /// replay the whole chain and refresh the stats.
    pub fn tick(&mut self) -> &Block {
        let tx = generate_transaction(self.next_tx_index);
        self.next_tx_index += 1;
        debug!("TICK - admitted {} to mempool", tx.id);
        self.transactions.push(tx);

        let pending: Vec<Transaction> = self
            .transactions
            .iter()
            .filter(|t| t.is_pending())
            .cloned()
            .collect();
        let height = self.blocks.len() as u64;
        let block_miner = miner::select(height);
        let block = Block::mine(&pending, self.blocks.last(), &block_miner.address);

        // Rebuild the transaction list as a fresh snapshot with the
        // included entries confirmed, rather than patching in place.
        let included: HashSet<&str> = block.transactions.iter().map(|t| t.id.as_str()).collect();
        let number = block.number;
        let rebuilt: Vec<Transaction> = self
            .transactions
            .iter()
            .map(|t| {
                if t.is_pending() && included.contains(t.id.as_str()) {
                    t.confirmed_in(number)
                } else {
                    t.clone()
                }
            })
            .collect();
        self.transactions = rebuilt;

        info!(
            "TICK - sealed block #{} (hash={}, nonce={}, txs={}, difficulty={})",
            block.number, block.hash, block.nonce, block.transactions_count, block.difficulty
        );
        self.blocks.push(block);

        let (validations, stats) =
            run_consensus(&self.blocks, &self.transactions, miner::count());
        let disagreed = validations.iter().filter(|v| !v.is_valid).count();
        debug!(
            "CONSENSUS - replayed {} blocks ({} disagreed)",
            validations.len(),
            disagreed
        );
        self.validations = validations;
        self.stats = stats;

        self.blocks.last().expect("chain is non-empty after tick")
    }

    /// Deploy a contract record. The registry is append-only per session.
    pub fn deploy_contract(&mut self, descriptor: &ContractDescriptor) -> &SmartContract {
        let contract = deploy(descriptor, self.next_contract_index);
        self.next_contract_index += 1;
        info!("DEPLOY - {} at {}", contract.name, contract.address);
        self.contracts.push(contract);
        self.contracts
            .last()
            .expect("registry is non-empty after deploy")
    }

    pub fn height(&self) -> usize {
        self.blocks.len()
    }

    /// Current mempool snapshot (pending transactions only).
    pub fn pending(&self) -> Vec<Transaction> {
        self.transactions
            .iter()
            .filter(|t| t.is_pending())
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Simulation;
    use crate::blockchain::Consensus;
    use crate::contract::ContractDescriptor;

    #[test]
    fn ticks_build_a_linked_agreed_chain() {
        let mut sim = Simulation::new();
        for _ in 0..3 {
            sim.tick();
        }

        assert_eq!(sim.blocks.len(), 3);
        for i in 1..sim.blocks.len() {
            assert_eq!(sim.blocks[i].previous_hash, sim.blocks[i - 1].hash);
            assert_eq!(sim.blocks[i].number, sim.blocks[i - 1].number + 1);
            assert!(sim.blocks[i].timestamp > sim.blocks[i - 1].timestamp);
        }
        assert_eq!(sim.validations.len(), 3);
        assert!(
            sim.validations
                .iter()
                .all(|v| v.consensus == Consensus::Agreed)
        );
    }

    #[test]
    fn each_tick_drains_the_mempool() {
        let mut sim = Simulation::new();
        sim.tick();
        sim.tick();

        assert!(sim.pending().is_empty());
        assert_eq!(sim.stats.total_transactions, 2);
        assert_eq!(sim.stats.pending_transactions, 0);
        for tx in &sim.transactions {
            assert!(tx.block_number.is_some());
        }
    }

    #[test]
    fn stats_track_the_chain() {
        let mut sim = Simulation::new();
        sim.tick();
        sim.tick();
        assert_eq!(sim.stats.total_blocks, 2);
        assert!(sim.stats.network_hashrate > 0);
    }

    #[test]
    fn contract_registry_is_append_only() {
        let mut sim = Simulation::new();
        let descriptor = ContractDescriptor {
            name: "TokenSale".into(),
            kind: "ERC20".into(),
            creator: "0xdeployer".into(),
        };
        let first = sim.deploy_contract(&descriptor).address.clone();
        let second = sim.deploy_contract(&descriptor).address.clone();
        assert_eq!(sim.contracts.len(), 2);
        assert_ne!(first, second);
    }
}
