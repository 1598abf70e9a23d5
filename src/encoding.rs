//! Canonical encodings shared by every stored shape
//!
//! - Addresses are parsed case-insensitively and always written in EIP-55
//!   mixed-case checksum form.
//! - Big integers (`U256`) are written as decimal strings and parsed back
//!   exactly, with no floating-point intermediate.

use crate::error::AccountStorageError;
use alloy_primitives::{Address, U256};
use std::str::FromStr;

/// Strip a `0x` or `0X` prefix
fn strip_hex_prefix(raw: &str) -> Option<&str> {
    raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X"))
}

/// Parse a hex address in any case
pub fn parse_address(raw: &str) -> Result<Address, AccountStorageError> {
    let digits = strip_hex_prefix(raw).ok_or_else(|| AccountStorageError::invalid_address(raw))?;
    Address::from_str(digits).map_err(|_| AccountStorageError::invalid_address(raw))
}

/// Normalize a hex address string to its EIP-55 checksum form
///
/// # Example
///
/// ```
/// use account_storage::encoding::checksum_address;
///
/// let addr = checksum_address("0xef4396d9ff8107086d215a1c9f8866c54795d7c7").unwrap();
/// assert_eq!(addr, "0xEf4396d9FF8107086d215a1c9f8866C54795D7c7");
/// ```
pub fn checksum_address(raw: &str) -> Result<String, AccountStorageError> {
    parse_address(raw).map(|addr| addr.to_checksum(None))
}

/// Parse a non-negative decimal integer string
pub fn parse_decimal(raw: &str) -> Result<U256, AccountStorageError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AccountStorageError::invalid_amount(raw));
    }
    U256::from_str_radix(raw, 10).map_err(|_| AccountStorageError::invalid_amount(raw))
}

/// Decode a hex string into bytes, with or without a `0x` prefix
pub fn decode_hex(raw: &str) -> Result<Vec<u8>, AccountStorageError> {
    let digits = strip_hex_prefix(raw).unwrap_or(raw);
    hex::decode(digits).map_err(|e| AccountStorageError::InvalidHex(format!("{}: {}", raw, e)))
}

/// Serde adapter: `Address` as a checksummed string
pub mod checksummed {
    use alloy_primitives::Address;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(addr: &Address, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&addr.to_checksum(None))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_address(&raw).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter: `Option<Address>` as a checksummed string or null
pub mod checksummed_opt {
    use alloy_primitives::Address;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(addr: &Option<Address>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match addr {
            Some(addr) => serializer.serialize_some(&addr.to_checksum(None)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Address>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        raw.map(|raw| super::parse_address(&raw).map_err(serde::de::Error::custom))
            .transpose()
    }
}

/// Serde adapter: `U256` as a decimal string
pub mod decimal {
    use alloy_primitives::U256;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &U256, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<U256, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_decimal(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_lowercase_address() {
        let addr = checksum_address("0xef4396d9ff8107086d215a1c9f8866c54795d7c7").unwrap();
        assert_eq!(addr, "0xEf4396d9FF8107086d215a1c9f8866C54795D7c7");
    }

    #[test]
    fn test_checksum_is_idempotent() {
        let once = checksum_address("0x833589FCD6EDB6E08F4C7C32D4F71B54BDA02913").unwrap();
        let twice = checksum_address(&once).unwrap();
        assert_eq!(once, "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_rejects_bad_addresses() {
        assert!(parse_address("").is_err());
        assert!(parse_address("0x1234").is_err());
        assert!(parse_address("ef4396d9ff8107086d215a1c9f8866c54795d7c7").is_err());
        assert!(parse_address("0xzz4396d9ff8107086d215a1c9f8866c54795d7c7").is_err());
        assert!(parse_address("0X").is_err());
    }

    #[test]
    fn test_uppercase_prefix_accepted_everywhere() {
        assert_eq!(
            checksum_address("0XEF4396D9FF8107086D215A1C9F8866C54795D7C7").unwrap(),
            "0xEf4396d9FF8107086d215a1c9f8866C54795D7c7"
        );
        assert_eq!(decode_hex("0X0a0b").unwrap(), vec![0x0a, 0x0b]);
        assert_eq!(decode_hex("0X").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("0").unwrap(), U256::ZERO);
        assert_eq!(parse_decimal("123").unwrap(), U256::from(123u64));

        let max = U256::MAX.to_string();
        assert_eq!(parse_decimal(&max).unwrap(), U256::MAX);
    }

    #[test]
    fn test_parse_decimal_rejects_non_digits() {
        assert!(parse_decimal("").is_err());
        assert!(parse_decimal("-1").is_err());
        assert!(parse_decimal("1.5").is_err());
        assert!(parse_decimal("0x10").is_err());
        assert!(parse_decimal("1_000").is_err());
    }

    #[test]
    fn test_decode_hex() {
        assert_eq!(decode_hex("0x0a0b").unwrap(), vec![0x0a, 0x0b]);
        assert_eq!(decode_hex("ff").unwrap(), vec![0xff]);
        assert!(decode_hex("0xabc").is_err());
    }
}
