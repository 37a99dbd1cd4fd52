/// Hex of the first `n` bytes of a fingerprint, for log lines.
pub fn short_hex(bytes: &[u8], n: usize) -> String {
    hex::encode(&bytes[..n.min(bytes.len())])
}
