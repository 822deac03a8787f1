//! Hex string utilities for addresses, selectors and quantities
//!
//! Every registry lookup in the classifier is keyed by an exact lower-cased
//! hex string, so normalisation happens once at the ingest boundary and the
//! helpers here stay allocation-light on the matching path.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Lower-cased 20-byte contract/account address (`0x` + 40 hex digits)
    pub static ref ADDRESS_RE: Regex = Regex::new(r"^0x[0-9a-f]{40}$").unwrap();

    /// Lower-cased 32-byte transaction hash or log topic (`0x` + 64 hex digits)
    pub static ref HASH_RE: Regex = Regex::new(r"^0x[0-9a-f]{64}$").unwrap();

    /// Lower-cased 4-byte method selector (`0x` + 8 hex digits)
    pub static ref SELECTOR_RE: Regex = Regex::new(r"^0x[0-9a-f]{8}$").unwrap();
}

/// Trim and lower-case a hex string for registry matching.
///
/// # Examples
/// ```
/// use txlabel::utils::hex::normalise;
///
/// assert_eq!(normalise(" 0xABcD12 "), "0xabcd12");
/// ```
pub fn normalise(s: &str) -> String {
    s.trim().to_ascii_lowercase()
}

/// Extract the 4-byte method selector from hex-encoded call data.
///
/// Returns `None` when the call data is empty (`"0x"` or `""`), shorter than
/// 4 bytes, missing the `0x` prefix, or not valid hex - all of which simply
/// mean "no selector signal" to the detectors.
///
/// # Examples
/// ```
/// use txlabel::utils::hex::selector;
///
/// assert_eq!(
///     selector("0x38ed1739000000000000000000000000000000000000000000000000"),
///     Some("0x38ed1739".to_string())
/// );
/// assert_eq!(selector("0x"), None);
/// assert_eq!(selector("0x38ed17"), None); // too short
/// assert_eq!(selector("not-call-data"), None);
/// ```
pub fn selector(input: &str) -> Option<String> {
    let body = input.strip_prefix("0x")?;
    if body.len() < 8 {
        return None;
    }
    let sel = &body[..8];
    // hex::decode doubles as the validity check for the 4 selector bytes
    hex::decode(sel).ok()?;
    Some(format!("0x{}", sel.to_ascii_lowercase()))
}

/// True when a hex (`0x`-prefixed) or decimal quantity string encodes a
/// non-zero value. Malformed quantities count as zero - no signal.
///
/// # Examples
/// ```
/// use txlabel::utils::hex::is_nonzero_quantity;
///
/// assert!(is_nonzero_quantity("0xde0b6b3a7640000"));
/// assert!(is_nonzero_quantity("1000"));
/// assert!(!is_nonzero_quantity("0x0"));
/// assert!(!is_nonzero_quantity("0"));
/// assert!(!is_nonzero_quantity(""));
/// assert!(!is_nonzero_quantity("wei"));
/// ```
pub fn is_nonzero_quantity(s: &str) -> bool {
    let body = s.strip_prefix("0x").unwrap_or(s);
    !body.is_empty()
        && body.bytes().all(|b| b.is_ascii_hexdigit())
        && body.bytes().any(|b| b != b'0')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_regex_rejects_uppercase_and_wrong_width() {
        assert!(ADDRESS_RE.is_match("0x7a250d5630b4cf539739df2c5dacb4c659f2488d"));
        assert!(!ADDRESS_RE.is_match("0x7A250d5630b4cf539739df2c5dacb4c659f2488d"));
        assert!(!ADDRESS_RE.is_match("0x7a250d"));
        assert!(!ADDRESS_RE.is_match("7a250d5630b4cf539739df2c5dacb4c659f2488d"));
    }

    #[test]
    fn test_selector_ignores_case_in_call_data() {
        assert_eq!(
            selector("0xA9059CBB0000000000000000000000000000000000000000"),
            Some("0xa9059cbb".to_string())
        );
    }

    #[test]
    fn test_selector_rejects_non_hex_prefix() {
        assert_eq!(selector("0xzz059cbb00000000"), None);
    }
}
