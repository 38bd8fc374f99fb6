use serde::{Deserialize, Serialize};

use crate::blockchain::SIM_EPOCH_MILLIS;
use crate::hash::{CANONICAL_VERSION, hash_string};

/// Inputs a caller supplies to deploy a contract.
#[derive(Debug, Clone, Deserialize)]
pub struct ContractDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub creator: String,
}

/// A deployed contract record. Created once at deployment and immutable
/// thereafter; no upgrade path is modeled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SmartContract {
    pub address: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub gas_used: u64,
    pub status: String,
    pub timestamp: i64,
    pub creator: String,
    pub bytecode: String,
    pub abi: String,
}

/// Synthesize the deployment record for the `index`-th contract. Pure in
/// `(descriptor, index)`: no failure mode, no entropy.
pub fn deploy(descriptor: &ContractDescriptor, index: u64) -> SmartContract {
    let digest = hash_string(&format!(
        "{CANONICAL_VERSION}|contract|{}|{}|{}|{}",
        descriptor.name, descriptor.kind, descriptor.creator, index
    ));
    // Trailing 40 hex chars of the digest, Ethereum-address shaped.
    let address = format!("0x{}", &digest[digest.len() - 40..]);

    let abi = serde_json::json!([
        { "type": "constructor", "inputs": [] },
        { "type": "function", "name": "execute", "inputs": [], "outputs": [] },
    ])
    .to_string();

    SmartContract {
        address,
        name: descriptor.name.clone(),
        kind: descriptor.kind.clone(),
        gas_used: 50_000 + (index % 10) * 2_500,
        status: "active".to_string(),
        timestamp: SIM_EPOCH_MILLIS + index as i64 * 1_000,
        creator: descriptor.creator.clone(),
        bytecode: synth_bytecode(index),
        abi,
    }
}

/// Deterministic placeholder bytecode for the `index`-th deployment.
fn synth_bytecode(index: u64) -> String {
    let bytes: Vec<u8> = (0..32)
        .map(|i: u64| (index.wrapping_mul(31).wrapping_add(i * 7) % 256) as u8)
        .collect();
    format!("0x{}", hex::encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::{ContractDescriptor, deploy};

    fn descriptor() -> ContractDescriptor {
        ContractDescriptor {
            name: "TokenSale".into(),
            kind: "ERC20".into(),
            creator: "0xdeployer".into(),
        }
    }

    #[test]
    fn deployment_is_deterministic() {
        assert_eq!(deploy(&descriptor(), 3), deploy(&descriptor(), 3));
    }

    #[test]
    fn addresses_are_ethereum_shaped_and_distinct() {
        let a = deploy(&descriptor(), 0);
        let b = deploy(&descriptor(), 1);
        assert!(a.address.starts_with("0x"));
        assert_eq!(a.address.len(), 42);
        assert_ne!(a.address, b.address);
    }

    #[test]
    fn bytecode_is_hex_encoded() {
        let contract = deploy(&descriptor(), 5);
        assert!(contract.bytecode.starts_with("0x"));
        assert_eq!(contract.bytecode.len(), 2 + 64);
        assert!(hex::decode(&contract.bytecode[2..]).is_ok());
    }
}
