//! Small helpers shared across the crate (hex formatting and parsing).

/// Converts bytes to a hexadecimal string.
pub fn hex(bytes: &[u8]) -> String {
    let mut hex = String::with_capacity(bytes.len() * 2);
    for byte in bytes.iter() {
        hex.push_str(&format!("{byte:02x}"));
    }
    hex
}

/// Converts a hexadecimal string to bytes.
pub fn from_hex(hex: &str) -> Option<Vec<u8>> {
    if hex.len() % 2 != 0 {
        return None;
    }

    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).ok())
        .collect()
}

/// Converts a hexadecimal string to bytes, stripping whitespace and/or a `0x`
/// prefix. Commonly used in testing to encode external test vectors without
/// modification.
pub fn from_hex_formatted(hex: &str) -> Option<Vec<u8>> {
    let hex = hex.replace(['\t', '\n', '\r', ' '], "");
    let res = hex.strip_prefix("0x").unwrap_or(&hex);
    from_hex(res)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex() {
        assert_eq!(hex(&[]), "");
        assert_eq!(hex(&[0x00, 0x01, 0xab, 0xff]), "0001abff");
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(from_hex("0001abff"), Some(vec![0x00, 0x01, 0xab, 0xff]));
        assert_eq!(from_hex(""), Some(vec![]));
        assert_eq!(from_hex("abc"), None);
        assert_eq!(from_hex("zz"), None);
    }

    #[test]
    fn test_from_hex_formatted() {
        assert_eq!(
            from_hex_formatted("0x0001abff"),
            Some(vec![0x00, 0x01, 0xab, 0xff])
        );
        assert_eq!(
            from_hex_formatted(
                "00 01
                 ab ff"
            ),
            Some(vec![0x00, 0x01, 0xab, 0xff])
        );
        assert_eq!(from_hex_formatted("0xgg"), None);
    }

    #[test]
    fn test_round_trip() {
        let bytes = vec![0xde, 0xad, 0xbe, 0xef];
        assert_eq!(from_hex(&hex(&bytes)), Some(bytes));
    }
}
