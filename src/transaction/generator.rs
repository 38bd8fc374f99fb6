use super::model::Transaction;
use crate::blockchain::SIM_EPOCH_MILLIS;

/// Fixed address book the generator draws from. Index-derived picks keep
/// successive transactions varied but reproducible.
const ADDRESSES: [&str; 6] = [
    "0x742d35cc6634c0532925a3b844bc454e4438f44e",
    "0x53d284357ec70ce289d6d64134dfac8e511c8a3d",
    "0xfe9e8709d3215310075d67e3ed32a380ccf451c8",
    "0xab5801a7d398351b8be11c439e05c5b3259aec9b",
    "0x281055afc982d96fab65b3a49cac8b878184cb16",
    "0x6f46cf5569aefa1acc1009290c8e043747172d89",
];

/// Synthesize the `index`-th transaction. Pure in `index`: the same index
/// always yields the same transaction, no clock or entropy involved.
pub fn generate_transaction(index: u64) -> Transaction {
    let from = ADDRESSES[index as usize % ADDRESSES.len()];
    let to = ADDRESSES[(index as usize + 3) % ADDRESSES.len()];
    Transaction::new(
        format!("tx-{index}"),
        from.to_string(),
        to.to_string(),
        ((index * 7 + 13) % 500 + 1) as i64,
        21_000 + (index % 8) * 3_000,
        20 + (index % 40),
        index as i64,
        SIM_EPOCH_MILLIS + index as i64 * 1_000,
    )
}

#[cfg(test)]
mod tests {
    use super::generate_transaction;
    use crate::transaction::{MIN_GAS, TxStatus};

    #[test]
    fn pure_in_index() {
        assert_eq!(generate_transaction(7), generate_transaction(7));
        assert_ne!(generate_transaction(7).hash, generate_transaction(8).hash);
    }

    #[test]
    fn always_well_formed() {
        for index in 0..50 {
            let tx = generate_transaction(index);
            assert!(tx.amount > 0);
            assert!(tx.gas >= MIN_GAS);
            assert!(tx.nonce >= 0);
            assert_ne!(tx.from, tx.to);
            assert_eq!(tx.status, TxStatus::Pending);
            assert_eq!(tx.block_number, None);
        }
    }
}
