use crate::transaction::Transaction;

/// Version tag baked into every canonical preimage. Bump it when a field
/// list changes so old hashes cannot collide with the new encoding.
pub const CANONICAL_VERSION: &str = "v1";

/// Length of a rendered hash: `0x` plus 64 hex digits.
pub const HASH_LEN: usize = 66;

/// Deterministic string hash: a rolling polynomial accumulator
/// (`h = h*31 + char`, mod 2^32) rendered as `0x` plus 64 zero-padded hex
/// digits. Not cryptographic; it only gives records stable, reproducible
/// identities.
pub fn hash_string(input: &str) -> String {
    let mut acc: u32 = 0;
    for c in input.chars() {
        acc = acc.wrapping_mul(31).wrapping_add(c as u32);
    }
    format!("0x{acc:064x}")
}

/// Canonical encoding of a transaction: explicit ordered field list,
/// excluding `hash` itself and the lifecycle fields (`status`,
/// `block_number`) that mutate after the transaction is sealed.
pub fn canonical_transaction(tx: &Transaction) -> String {
    format!(
        "{CANONICAL_VERSION}|tx|{}|{}|{}|{}|{}|{}|{}|{}",
        tx.id, tx.from, tx.to, tx.amount, tx.gas, tx.gas_price, tx.nonce, tx.timestamp
    )
}

/// Canonical encoding of a block header. Commits to the contained
/// transactions via their content hashes, so a later status flip on a
/// confirmed transaction cannot change what the block hashed over.
pub fn canonical_block(
    number: u64,
    timestamp: i64,
    previous_hash: &str,
    miner: &str,
    difficulty: u32,
    nonce: u64,
    transactions: &[Transaction],
) -> String {
    let tx_hashes = transactions
        .iter()
        .map(|t| t.hash.as_str())
        .collect::<Vec<_>>()
        .join(",");
    format!(
        "{CANONICAL_VERSION}|block|{number}|{timestamp}|{previous_hash}|{miner}|{difficulty}|{nonce}|{tx_hashes}"
    )
}

#[cfg(test)]
mod tests {
    use super::{HASH_LEN, canonical_transaction, hash_string};
    use crate::transaction::generate_transaction;

    #[test]
    fn hash_is_deterministic() {
        let a = hash_string("block|0|12345");
        let b = hash_string("block|0|12345");
        assert_eq!(a, b);
    }

    #[test]
    fn hash_is_prefixed_and_padded() {
        let h = hash_string("anything");
        assert!(h.starts_with("0x"));
        assert_eq!(h.len(), HASH_LEN);
    }

    #[test]
    fn distinct_inputs_distinct_hashes() {
        assert_ne!(hash_string("abc"), hash_string("abd"));
    }

    #[test]
    fn canonical_transaction_ignores_lifecycle_fields() {
        let tx = generate_transaction(4);
        let confirmed = tx.confirmed_in(2);
        assert_eq!(canonical_transaction(&tx), canonical_transaction(&confirmed));
    }
}
