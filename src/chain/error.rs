use thiserror::Error;

/// Everything that can go wrong when certifying a candidate block or
/// rebuilding one from its field mapping. Nothing is recovered internally;
/// each failure surfaces to the caller as-is.
#[derive(Debug, Error)]
pub enum BlockError {
    /// The candidate's `last_hash` does not match the predecessor's `hash`.
    #[error("block last_hash does not match the predecessor's hash")]
    InvalidLinkage,
    /// The stored hash does not carry the required leading zero bits.
    #[error("block hash does not meet the proof-of-work requirement")]
    ProofOfWorkNotMet,
    /// Difficulty moved by more than one step between consecutive blocks.
    #[error("difficulty may only move by one between consecutive blocks")]
    DifficultyJumpTooLarge,
    /// Recomputing the digest over the candidate's fields disagrees with the
    /// stored hash.
    #[error("block hash does not match the block's contents")]
    HashMismatch,
    /// The field mapping could not be turned back into a block.
    #[error("invalid block mapping: {0}")]
    Deserialization(#[from] serde_json::Error),
}
