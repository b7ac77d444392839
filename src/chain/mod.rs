pub mod block;
pub mod error;
pub mod miner;
pub mod validator;

pub use block::Block;
pub use error::BlockError;
pub use miner::{Clock, SystemClock, adjust_difficulty, mine_block, mine_block_bounded, mine_block_with};
pub use validator::certify_block;

/// Target interval between consecutive blocks, in nanoseconds (the same unit
/// as block timestamps). Difficulty retargeting compares the elapsed time
/// since the predecessor against it.
pub const MINE_RATE: i64 = 4_000_000_000;

/// Difficulty of the fixed genesis block.
pub const GENESIS_DIFFICULTY: u32 = 3;
