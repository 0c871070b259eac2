use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of `bytes`, used to fingerprint written filter files.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    let mut output = String::with_capacity(digest.len() * 2);

    for byte in digest {
        for nibble in [byte >> 4, byte & 0x0f] {
            if let Some(digit) = char::from_digit(u32::from(nibble), 16) {
                output.push(digit);
            }
        }
    }

    output
}
