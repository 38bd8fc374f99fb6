use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::{DIFFICULTY_STEP_BLOCKS, GENESIS_PREVIOUS_HASH, MAX_NONCE_ATTEMPTS};
use crate::hash::{canonical_block, hash_string};
use crate::transaction::Transaction;

/// A sealed block: links to its predecessor by hash and bundles the
/// transactions it confirmed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub number: u64,
    pub timestamp: i64, // Unix timestamp (UTC, milliseconds)
    pub transactions: Vec<Transaction>,
    pub previous_hash: String,
    pub miner: String,
    pub difficulty: u32,
    pub nonce: u64,
    pub hash: String, // Cached hash of the block
    pub gas_used: u64,
    pub size: usize,
    pub transactions_count: usize,
}

/// Required leading-zero count for a block at height `number`: steps up
/// every `DIFFICULTY_STEP_BLOCKS` blocks, never decreases.
pub fn difficulty_for_height(number: u64) -> u32 {
    (number / DIFFICULTY_STEP_BLOCKS + 1).max(1) as u32
}

/// True when `hash` starts with `difficulty` zero characters.
pub fn meets_difficulty(hash: &str, difficulty: u32) -> bool {
    hash.chars().take(difficulty as usize).all(|c| c == '0')
}

impl Block {
    /// Assemble and seal a block at a fixed timestamp. Searches nonces
    /// `0..MAX_NONCE_ATTEMPTS` for a hash meeting the difficulty prefix.
    /// When the attempt budget runs out the last attempt is kept, so the
    /// emitted block may fail its own difficulty check.
    pub fn mine_at(
        transactions: &[Transaction],
        previous: Option<&Block>,
        miner: &str,
        timestamp: i64,
    ) -> Self {
        let number = previous.map_or(0, |p| p.number + 1);
        let difficulty = difficulty_for_height(number);
        let previous_hash = previous.map_or_else(
            || GENESIS_PREVIOUS_HASH.to_string(),
            |p| p.hash.clone(),
        );
        let transactions: Vec<Transaction> = transactions
            .iter()
            .map(|t| t.confirmed_in(number))
            .collect();

        let mut nonce = 0;
        let mut hash = String::new();
        for candidate in 0..MAX_NONCE_ATTEMPTS {
            nonce = candidate;
            hash = hash_string(&canonical_block(
                number,
                timestamp,
                &previous_hash,
                miner,
                difficulty,
                candidate,
                &transactions,
            ));
            if meets_difficulty(&hash, difficulty) {
                break;
            }
        }

        let size = canonical_block(
            number,
            timestamp,
            &previous_hash,
            miner,
            difficulty,
            nonce,
            &transactions,
        )
        .len();
        let gas_used = transactions.iter().map(|t| t.gas).sum();
        let transactions_count = transactions.len();

        Self {
            number,
            timestamp,
            transactions,
            previous_hash,
            miner: miner.to_string(),
            difficulty,
            nonce,
            hash,
            gas_used,
            size,
            transactions_count,
        }
    }

    /// Wall-clock form of `mine_at`: stamps the block at now, clamped past
    /// the predecessor so timestamps stay strictly increasing.
    pub fn mine(transactions: &[Transaction], previous: Option<&Block>, miner: &str) -> Self {
        let mut timestamp = Utc::now().timestamp_millis();
        if let Some(prev) = previous {
            timestamp = timestamp.max(prev.timestamp + 1);
        }
        Self::mine_at(transactions, previous, miner, timestamp)
    }

    /// Recompute this block's hash from its canonical fields (excluding
    /// the cached `hash` itself).
    pub fn compute_hash(&self) -> String {
        hash_string(&canonical_block(
            self.number,
            self.timestamp,
            &self.previous_hash,
            &self.miner,
            self.difficulty,
            self.nonce,
            &self.transactions,
        ))
    }
}
