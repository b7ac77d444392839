use serde_json::Value;
use sha2::{Digest, Sha256};

/// SHA-256 digest over the ordered tuple of puzzle inputs, as lowercase hex
/// (64 characters).
///
/// The same ordered inputs always produce the same digest, across processes
/// and time; the ledger's tamper evidence rests on that. The payload is
/// serialized deterministically as JSON and included in the preimage.
pub fn crypto_hash(
    timestamp: i64,
    last_hash: &str,
    data: &Value,
    difficulty: u32,
    nonce: u64,
) -> String {
    let data_json = serde_json::to_string(data).expect("serialize block data");
    let preimage = format!("{timestamp}:{last_hash}:{data_json}:{difficulty}:{nonce}");

    let mut hasher = Sha256::new();
    hasher.update(preimage.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn digest_is_lowercase_hex_of_fixed_length() {
        let h = crypto_hash(1, "prev", &json!("payload"), 3, 0);
        assert_eq!(h.len(), 64);
        assert!(h.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn digest_is_deterministic() {
        let a = crypto_hash(42, "prev", &json!({"k": "v"}), 5, 99);
        let b = crypto_hash(42, "prev", &json!({"k": "v"}), 5, 99);
        assert_eq!(a, b);
    }

    #[test]
    fn digest_is_sensitive_to_every_input() {
        let base = crypto_hash(42, "prev", &json!("payload"), 5, 99);

        assert_ne!(base, crypto_hash(43, "prev", &json!("payload"), 5, 99));
        assert_ne!(base, crypto_hash(42, "other", &json!("payload"), 5, 99));
        assert_ne!(base, crypto_hash(42, "prev", &json!("tampered"), 5, 99));
        assert_ne!(base, crypto_hash(42, "prev", &json!("payload"), 6, 99));
        assert_ne!(base, crypto_hash(42, "prev", &json!("payload"), 5, 100));
    }
}
