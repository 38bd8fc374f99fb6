use serde::Serialize;

/// A registered miner. The registry is fixed for the session; block
/// production rotates through it round-robin by height.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Miner {
    pub address: String,
    pub hash_rate: u64, // synthetic, MH/s
    pub status: String,
}

const MINERS: [(&str, u64); 4] = [
    ("0xMiner1", 120),
    ("0xMiner2", 155),
    ("0xMiner3", 95),
    ("0xMiner4", 210),
];

/// Number of registered miners.
pub fn count() -> usize {
    MINERS.len()
}

/// Full registry snapshot.
pub fn registry() -> Vec<Miner> {
    MINERS
        .iter()
        .map(|&(address, hash_rate)| Miner {
            address: address.to_string(),
            hash_rate,
            status: "active".to_string(),
        })
        .collect()
}

/// Miner assigned to the block at `height`.
pub fn select(height: u64) -> Miner {
    let (address, hash_rate) = MINERS[height as usize % MINERS.len()];
    Miner {
        address: address.to_string(),
        hash_rate,
        status: "active".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{count, registry, select};

    #[test]
    fn selection_rotates_round_robin() {
        assert_eq!(select(0).address, "0xMiner1");
        assert_eq!(select(1).address, "0xMiner2");
        assert_eq!(select(count() as u64), select(0));
    }

    #[test]
    fn registry_matches_count() {
        assert_eq!(registry().len(), count());
        assert!(registry().iter().all(|m| m.status == "active"));
    }
}
