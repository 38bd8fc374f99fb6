use serde::{Deserialize, Serialize};

use crate::hash::{canonical_transaction, hash_string};

/// Lifecycle of a transaction: mempool-owned until a block confirms it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxStatus {
    Pending,
    Confirmed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub from: String,
    pub to: String,
    pub amount: i64,
    pub gas: u64,
    pub gas_price: u64,
    pub status: TxStatus,
    pub block_number: Option<u64>,
    pub timestamp: i64,
    pub nonce: i64,
    /// Content hash over the canonical fields (lifecycle fields excluded).
    pub hash: String,
}

impl Transaction {
    /// Build a pending transaction and stamp its content hash.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: String,
        from: String,
        to: String,
        amount: i64,
        gas: u64,
        gas_price: u64,
        nonce: i64,
        timestamp: i64,
    ) -> Self {
        let mut tx = Self {
            id,
            from,
            to,
            amount,
            gas,
            gas_price,
            status: TxStatus::Pending,
            block_number: None,
            timestamp,
            nonce,
            hash: String::new(),
        };
        tx.hash = hash_string(&canonical_transaction(&tx));
        tx
    }

    pub fn is_pending(&self) -> bool {
        self.status == TxStatus::Pending
    }

    /// Copy of this transaction as confirmed by block `block_number`.
    /// The content hash is unchanged; only the lifecycle fields move.
    pub fn confirmed_in(&self, block_number: u64) -> Self {
        Self {
            status: TxStatus::Confirmed,
            block_number: Some(block_number),
            ..self.clone()
        }
    }
}
