use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::GENESIS_DIFFICULTY;
use super::error::BlockError;

/// A single immutable block of the proof-of-work ledger.
///
/// The block carries no behaviour beyond conversion to and from its plain
/// field mapping; mining lives in [`super::miner`] and successor checks in
/// [`super::validator`]. Equality is field-wise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Chain height; the genesis block sits at 0.
    pub number: u64,
    /// Nanoseconds since the Unix epoch (UTC); a puzzle input.
    pub timestamp: i64,
    /// Human-readable rendering of `timestamp`. Informational only, it takes
    /// part in no check and is not hashed.
    pub time_record: String,
    /// Hex digest of the predecessor block's `hash`.
    pub last_hash: String,
    /// Digest over `(timestamp, last_hash, data, difficulty, nonce)`.
    pub hash: String,
    /// Opaque payload; never interpreted here.
    pub data: Value,
    /// Leading zero bits the binary expansion of `hash` must carry.
    pub difficulty: u32,
    /// Proof-of-work search counter.
    pub nonce: u64,
}

impl Block {
    /// Build a block from pre-baked field values. No field is derived or
    /// checked here; the caller supplies the finished `hash`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        number: u64,
        timestamp: i64,
        time_record: String,
        last_hash: String,
        hash: String,
        data: Value,
        difficulty: u32,
        nonce: u64,
    ) -> Self {
        Self {
            number,
            timestamp,
            time_record,
            last_hash,
            hash,
            data,
            difficulty,
            nonce,
        }
    }

    /// The fixed first block of the chain. Never mined and never certified
    /// against a predecessor; its digests are sentinels, not real hashes.
    pub fn genesis() -> Self {
        Self {
            number: 0,
            timestamp: 1,
            time_record: String::from("0"),
            last_hash: String::from("genesis_last_hash"),
            hash: String::from("genesis_hash"),
            data: json!([]),
            difficulty: GENESIS_DIFFICULTY,
            nonce: 0,
        }
    }

    /// Serialize to a plain JSON mapping of the block's fields.
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).expect("serialize block")
    }

    /// Rebuild a block from a mapping produced by [`Block::to_json`]. A
    /// mapping missing a field, or carrying one of the wrong shape, fails
    /// with [`BlockError::Deserialization`].
    pub fn from_json(value: Value) -> Result<Self, BlockError> {
        serde_json::from_value(value).map_err(BlockError::from)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Block #{}", self.number)?;
        writeln!(f, "  time_record: {}", self.time_record)?;
        writeln!(f, "  timestamp:   {}", self.timestamp)?;
        writeln!(f, "  hash:        {}", self.hash)?;
        writeln!(f, "  last_hash:   {}", self.last_hash)?;
        writeln!(f, "  data:        {}", self.data)?;
        writeln!(f, "  difficulty:  {}", self.difficulty)?;
        write!(f, "  nonce:       {}", self.nonce)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genesis_is_the_fixed_sentinel() {
        let g = Block::genesis();
        assert_eq!(g.number, 0);
        assert_eq!(g.timestamp, 1);
        assert_eq!(g.last_hash, "genesis_last_hash");
        assert_eq!(g.hash, "genesis_hash");
        assert_eq!(g.data, json!([]));
        assert_eq!(g.difficulty, 3);
        assert_eq!(g.nonce, 0);

        // Pure: every call yields the identical value.
        assert_eq!(g, Block::genesis());
    }

    #[test]
    fn equality_is_field_wise() {
        let g = Block::genesis();
        let mut other = g.clone();
        assert_eq!(g, other);

        other.nonce += 1;
        assert_ne!(g, other);
    }

    #[test]
    fn json_round_trip_is_identity() {
        let b = Block::new(
            7,
            1_700_000_000_000_000_000,
            "Tue, 14 Nov 2023 22:13:20 +0000".into(),
            "aa".repeat(32),
            "bb".repeat(32),
            json!({"memo": "round trip", "amount": 42}),
            4,
            19_734,
        );

        let restored = Block::from_json(b.to_json()).unwrap();
        assert_eq!(b, restored);
    }

    #[test]
    fn mapping_missing_a_field_fails_to_deserialize() {
        let mut mapping = Block::genesis().to_json();
        mapping.as_object_mut().unwrap().remove("nonce");

        let err = Block::from_json(mapping).unwrap_err();
        assert!(matches!(err, BlockError::Deserialization(_)));
    }

    #[test]
    fn display_lists_every_field() {
        let g = Block::genesis();
        let rendered = g.to_string();
        assert!(rendered.contains("Block #0"));
        assert!(rendered.contains("genesis_hash"));
        assert!(rendered.contains("genesis_last_hash"));
        assert!(rendered.contains("difficulty:  3"));
    }
}
