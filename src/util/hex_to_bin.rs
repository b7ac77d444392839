/// Expand a hex digest into its binary-digit string: every hex character maps
/// to exactly four `'0'`/`'1'` characters, leading zeros preserved, so the
/// result is always four times as long as the input.
///
/// Only used to count leading zero bits of a digest. Feeding a non-hex
/// character is a caller contract violation and panics.
pub fn hex_to_bin(hex_digest: &str) -> String {
    let mut bits = String::with_capacity(hex_digest.len() * 4);
    for c in hex_digest.chars() {
        let digit = c.to_digit(16).expect("digest must be hex");
        bits.push_str(&format!("{digit:04b}"));
    }
    bits
}
