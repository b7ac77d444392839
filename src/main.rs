use dotenvy::dotenv;
use log::{error, info};
use serde_json::json;
use std::env;

use powblock::chain::{Block, MINE_RATE, SystemClock, certify_block, mine_block_with};

fn main() {
    let _ = dotenv();
    env_logger::init();

    let mine_rate: i64 = env::var("MINE_RATE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(MINE_RATE);

    let payload = env::args().nth(1).unwrap_or_else(|| "Hello".to_string());

    let genesis = Block::genesis();
    info!(
        "mining on top of block #{} ({}) at mine rate {} ns",
        genesis.number, genesis.hash, mine_rate
    );

    let block = mine_block_with(&genesis, json!(payload), &SystemClock, mine_rate);
    info!("mined block after {} attempts:\n{block}", block.nonce + 1);

    match certify_block(&genesis, &block) {
        Ok(()) => info!("block #{} certified against its predecessor", block.number),
        Err(e) => error!("certification failed: {e}"),
    }
}
