use chrono::{TimeZone, Utc};
use serde_json::Value;

use super::MINE_RATE;
use super::block::Block;
use crate::util::{crypto_hash, hex_to_bin};

/// Source of block timestamps. The miner samples it once per search attempt,
/// so tests can swap in a deterministic clock.
pub trait Clock {
    /// Current time in nanoseconds since the Unix epoch.
    fn now_nanos(&self) -> i64;
}

/// Wall clock backed by `chrono`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_nanos(&self) -> i64 {
        Utc::now()
            .timestamp_nanos_opt()
            .expect("system time within chrono's nanosecond range")
    }
}

/// Next difficulty for a block stamped `new_timestamp` on top of
/// `predecessor`.
///
/// A block arriving faster than `mine_rate` raises the difficulty by one,
/// a slower one lowers it by one, and it never drops below 1. An elapsed
/// time of exactly `mine_rate` counts as slow.
pub fn adjust_difficulty(predecessor: &Block, new_timestamp: i64, mine_rate: i64) -> u32 {
    if new_timestamp - predecessor.timestamp < mine_rate {
        return predecessor.difficulty + 1;
    }
    if predecessor.difficulty > 1 {
        return predecessor.difficulty - 1;
    }
    1
}

/// True when the first `difficulty` binary digits of `hash` are all zero.
pub(crate) fn meets_difficulty(hash: &str, difficulty: u32) -> bool {
    hex_to_bin(hash)
        .chars()
        .take(difficulty as usize)
        .all(|c| c == '0')
}

/// Mine the successor of `predecessor` carrying `data`, using the system
/// clock and the default [`MINE_RATE`].
///
/// Runs until a hash satisfies the current difficulty; there is no bound on
/// completion time. A caller that needs one should use
/// [`mine_block_bounded`].
pub fn mine_block(predecessor: &Block, data: Value) -> Block {
    mine_block_with(predecessor, data, &SystemClock, MINE_RATE)
}

/// As [`mine_block`], with an explicit clock and target interval.
pub fn mine_block_with(
    predecessor: &Block,
    data: Value,
    clock: &dyn Clock,
    mine_rate: i64,
) -> Block {
    search(predecessor, data, clock, mine_rate, None)
        .expect("unbounded search returns only on success")
}

/// As [`mine_block_with`], giving up after `max_attempts` hash evaluations so
/// a host can bound mining time. `None` means the budget ran out before a
/// satisfying hash was found.
pub fn mine_block_bounded(
    predecessor: &Block,
    data: Value,
    clock: &dyn Clock,
    mine_rate: i64,
    max_attempts: u64,
) -> Option<Block> {
    search(predecessor, data, clock, mine_rate, Some(max_attempts))
}

fn search(
    predecessor: &Block,
    data: Value,
    clock: &dyn Clock,
    mine_rate: i64,
    max_attempts: Option<u64>,
) -> Option<Block> {
    let number = predecessor.number + 1;
    let last_hash = predecessor.hash.clone();

    let mut nonce: u64 = 0;
    let mut attempts: u64 = 0;

    loop {
        if let Some(limit) = max_attempts {
            if attempts >= limit {
                return None;
            }
        }

        let timestamp = clock.now_nanos();
        // Difficulty follows the live timestamp; it is not fixed at loop
        // entry.
        let difficulty = adjust_difficulty(predecessor, timestamp, mine_rate);
        let hash = crypto_hash(timestamp, &last_hash, &data, difficulty, nonce);
        attempts += 1;

        if meets_difficulty(&hash, difficulty) {
            let time_record = Utc.timestamp_nanos(timestamp).to_rfc2822();
            return Some(Block::new(
                number,
                timestamp,
                time_record,
                last_hash,
                hash,
                data,
                difficulty,
                nonce,
            ));
        }

        nonce += 1;
    }
}
