use alloy_primitives::keccak256;
use serde::{Deserialize, Serialize};

/// The only block this node ever reports.
pub const STATIC_BLOCK_NUMBER: u64 = 1;

/// Keccak of the empty RLP list, used for the ommers hash of an empty block.
const EMPTY_OMMERS_HASH: &str =
    "0x1dcc4de8dec75d7aab85b567b6ccd41ad312451b948a7413f0a142fd40d49347";
/// Root of an empty trie.
const EMPTY_TRIE_ROOT: &str =
    "0x56e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421";

/// EVM-formatted block object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvmBlock {
    pub number: String,
    pub hash: String,
    pub parent_hash: String,
    pub nonce: String,
    pub sha3_uncles: String,
    pub logs_bloom: String,
    pub transactions_root: String,
    pub state_root: String,
    pub receipts_root: String,
    pub miner: String,
    pub difficulty: String,
    pub total_difficulty: String,
    pub extra_data: String,
    pub size: String,
    pub gas_limit: String,
    pub gas_used: String,
    pub timestamp: String,
    /// Always empty; nothing is ever mined.
    pub transactions: Vec<String>,
    pub uncles: Vec<String>,
}

impl EvmBlock {
    /// Empty block at [`STATIC_BLOCK_NUMBER`], identical on every call.
    pub fn static_block() -> Self {
        EvmBlock {
            number: format!("0x{:x}", STATIC_BLOCK_NUMBER),
            hash: block_hash(STATIC_BLOCK_NUMBER),
            parent_hash: block_hash(STATIC_BLOCK_NUMBER - 1),
            nonce: "0x0000000000000000".to_string(),
            sha3_uncles: EMPTY_OMMERS_HASH.to_string(),
            logs_bloom: format!("0x{}", "0".repeat(512)),
            transactions_root: EMPTY_TRIE_ROOT.to_string(),
            state_root: EMPTY_TRIE_ROOT.to_string(),
            receipts_root: EMPTY_TRIE_ROOT.to_string(),
            miner: format!("0x{}", "0".repeat(40)),
            difficulty: "0x0".to_string(),
            total_difficulty: "0x0".to_string(),
            extra_data: "0x".to_string(),
            size: "0x0".to_string(),
            gas_limit: "0x0".to_string(),
            gas_used: "0x0".to_string(),
            timestamp: "0x0".to_string(),
            transactions: Vec::new(),
            uncles: Vec::new(),
        }
    }
}

/// Deterministic placeholder hash for a block number.
pub fn block_hash(number: u64) -> String {
    let mut preimage = b"MOCK_BLOCK_".to_vec();
    preimage.extend_from_slice(&number.to_be_bytes());
    format!("0x{}", hex::encode(keccak256(&preimage).as_slice()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_hash() {
        let hash1 = block_hash(1);
        assert_eq!(hash1, block_hash(1));
        assert_ne!(hash1, block_hash(0));
        assert!(hash1.starts_with("0x"));
        assert_eq!(hash1.len(), 66);
    }

    #[test]
    fn test_static_block_shape() {
        let block = EvmBlock::static_block();
        assert_eq!(block, EvmBlock::static_block());

        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["number"], "0x1");
        assert_eq!(json["parentHash"], block_hash(0));
        assert_eq!(json["transactions"], serde_json::json!([]));
        assert_eq!(json["uncles"], serde_json::json!([]));
        assert!(json.get("totalDifficulty").is_some());
    }
}
