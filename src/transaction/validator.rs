use serde::Serialize;

use super::model::Transaction;

/// Minimum gas a transaction must carry (intrinsic transfer cost).
pub const MIN_GAS: u64 = 21_000;

/// Which rule produced a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TxCheck {
    Structure,
    Amount,
    Gas,
    Nonce,
}

/// Per-rule verdict for a single transaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TxValidation {
    #[serde(rename = "type")]
    pub check: TxCheck,
    pub is_valid: bool,
    pub message: String,
}

impl TxValidation {
    fn new(check: TxCheck, is_valid: bool, message: String) -> Self {
        Self {
            check,
            is_valid,
            message,
        }
    }
}

/// Run all four rules against a transaction, one result entry per rule.
/// A failing rule never short-circuits the rest; the caller renders
/// per-rule pass/fail.
pub fn validate_transaction(tx: &Transaction) -> Vec<TxValidation> {
    let structure_ok = !tx.from.is_empty() && !tx.to.is_empty();
    vec![
        TxValidation::new(
            TxCheck::Structure,
            structure_ok,
            if structure_ok {
                "sender and recipient present".to_string()
            } else {
                "missing sender or recipient address".to_string()
            },
        ),
        TxValidation::new(
            TxCheck::Amount,
            tx.amount > 0,
            if tx.amount > 0 {
                format!("amount {} is positive", tx.amount)
            } else {
                format!("amount {} must be positive", tx.amount)
            },
        ),
        TxValidation::new(
            TxCheck::Gas,
            tx.gas >= MIN_GAS,
            if tx.gas >= MIN_GAS {
                format!("gas {} meets the {MIN_GAS} minimum", tx.gas)
            } else {
                format!("gas {} is below the {MIN_GAS} minimum", tx.gas)
            },
        ),
        TxValidation::new(
            TxCheck::Nonce,
            tx.nonce >= 0,
            if tx.nonce >= 0 {
                format!("nonce {} is non-negative", tx.nonce)
            } else {
                format!("nonce {} must be non-negative", tx.nonce)
            },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::{MIN_GAS, TxCheck, validate_transaction};
    use crate::transaction::{Transaction, generate_transaction};

    fn tx_with(amount: i64, gas: u64, nonce: i64) -> Transaction {
        Transaction::new(
            "tx-test".into(),
            "0xaaa".into(),
            "0xbbb".into(),
            amount,
            gas,
            20,
            nonce,
            0,
        )
    }

    #[test]
    fn generated_transactions_pass_every_rule() {
        let results = validate_transaction(&generate_transaction(3));
        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|r| r.is_valid));
    }

    #[test]
    fn negative_amount_fails_only_the_amount_rule() {
        let results = validate_transaction(&tx_with(-5, MIN_GAS, 0));
        let failing: Vec<_> = results.iter().filter(|r| !r.is_valid).collect();
        assert_eq!(failing.len(), 1);
        assert_eq!(failing[0].check, TxCheck::Amount);
    }

    #[test]
    fn low_gas_fails_only_the_gas_rule() {
        let results = validate_transaction(&tx_with(10, MIN_GAS - 1, 0));
        let failing: Vec<_> = results.iter().filter(|r| !r.is_valid).collect();
        assert_eq!(failing.len(), 1);
        assert_eq!(failing[0].check, TxCheck::Gas);
    }

    #[test]
    fn missing_addresses_fail_the_structure_rule() {
        let mut tx = tx_with(10, MIN_GAS, 0);
        tx.to = String::new();
        let results = validate_transaction(&tx);
        let failing: Vec<_> = results.iter().filter(|r| !r.is_valid).collect();
        assert_eq!(failing.len(), 1);
        assert_eq!(failing[0].check, TxCheck::Structure);
    }
}
