//! Minimal building block of a proof-of-work ledger: an immutable [`Block`],
//! the mining search that produces one, the retargeting rule that keeps block
//! production near a target interval, and the certification of a candidate
//! block against its predecessor.
//!
//! Chain storage, chain selection and networking live in the surrounding
//! system; the block payload is an opaque JSON value here.

pub mod chain;
pub mod util;

pub use chain::{Block, BlockError};
