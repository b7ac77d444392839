pub mod crypto_hash;
pub mod hex_to_bin;

pub use crypto_hash::crypto_hash;
pub use hex_to_bin::hex_to_bin;
