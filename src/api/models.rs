use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::blockchain::{Block, BlockValidation, Simulation};
use crate::contract::SmartContract;
use crate::miner::Miner;
use crate::transaction::{Transaction, TxValidation};

/// Shared application state: the whole simulation behind one lock, driven
/// by the interval ticker or by POST /tick/.
pub struct AppState {
    pub simulation: Mutex<Simulation>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            simulation: Mutex::new(Simulation::new()),
        }
    }
}

/* ---------- Chain API Models ---------- */

#[derive(Serialize)]
pub struct ChainResponse {
    pub height: usize,
    pub blocks: Vec<Block>,
}

#[derive(Serialize)]
pub struct TickResponse {
    pub number: u64,
    pub hash: String,
    pub nonce: u64,
    pub difficulty: u32,
    pub transactions_count: usize,
}

#[derive(Serialize)]
pub struct ConsensusResponse {
    pub height: usize,
    pub validations: Vec<BlockValidation>,
}

/* ---------- TX API Models ---------- */

#[derive(Serialize)]
pub struct MempoolResponse {
    pub size: usize,
    pub transactions: Vec<Transaction>,
}

#[derive(Serialize)]
pub struct TransactionsResponse {
    pub total: usize,
    pub transactions: Vec<Transaction>,
}

#[derive(Deserialize)]
pub struct ValidateTxRequest {
    pub from: String,
    pub to: String,
    pub amount: i64,
    pub gas: u64,
    #[serde(default)]
    pub gas_price: u64,
    #[serde(default)]
    pub nonce: i64,
}

#[derive(Serialize)]
pub struct ValidateTxResponse {
    pub is_valid: bool,
    pub results: Vec<TxValidation>,
}

/* ---------- Contract API Models ---------- */

#[derive(Serialize)]
pub struct ContractsResponse {
    pub total: usize,
    pub contracts: Vec<SmartContract>,
}

/* ---------- Miner API Models ---------- */

#[derive(Serialize)]
pub struct MinersResponse {
    pub total: usize,
    pub miners: Vec<Miner>,
}
