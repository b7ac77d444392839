use super::block::Block;
use super::error::BlockError;
use super::miner::meets_difficulty;
use crate::util::crypto_hash;

/// Certify that `candidate` is a legal successor of `predecessor`.
///
/// Checks run in a fixed order and stop at the first failure: linkage,
/// proof-of-work, retarget step, digest binding. The final check recomputes
/// the digest over every puzzle field, so tampering with any of them without
/// re-hashing is caught even though the earlier checks trust the stored
/// `hash` and `difficulty`. The order matters for the reported reason, not
/// for the final accept/reject outcome.
pub fn certify_block(predecessor: &Block, candidate: &Block) -> Result<(), BlockError> {
    if candidate.last_hash != predecessor.hash {
        return Err(BlockError::InvalidLinkage);
    }

    if !meets_difficulty(&candidate.hash, candidate.difficulty) {
        return Err(BlockError::ProofOfWorkNotMet);
    }

    if predecessor.difficulty.abs_diff(candidate.difficulty) > 1 {
        return Err(BlockError::DifficultyJumpTooLarge);
    }

    let reconstructed = crypto_hash(
        candidate.timestamp,
        &candidate.last_hash,
        &candidate.data,
        candidate.difficulty,
        candidate.nonce,
    );
    if candidate.hash != reconstructed {
        return Err(BlockError::HashMismatch);
    }

    Ok(())
}
