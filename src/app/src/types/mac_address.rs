use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Characters accepted as octet separators in user input.
pub const MAC_SEPARATORS: [char; 3] = [':', '-', '.'];

/// Number of hex digits in a 48-bit MAC address
const MAC_HEX_DIGITS: usize = 12;

/// Strip all separators (`:`, `-`, `.`) from a MAC address string
pub fn normalize_mac_address(raw: &str) -> String {
    raw.chars().filter(|c| !MAC_SEPARATORS.contains(c)).collect()
}

/// Validate MAC address format
///
/// Accepts any mix of `:`, `-` and `.` separators (e.g. `00:11:22:33:44:55`,
/// `00-11-22-33-44-55`, `0011.2233.4455`, `001122334455`). After separators
/// are removed exactly twelve hex digits must remain.
pub fn is_valid_mac_address(raw: &str) -> bool {
    let normalized = normalize_mac_address(raw);
    normalized.len() == MAC_HEX_DIGITS && normalized.chars().all(|c| c.is_ascii_hexdigit())
}

/// A validated MAC address, stored without separators in the case it was entered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MacAddress(String);

impl MacAddress {
    /// Colon-separated notation, e.g. `00:11:22:aa:bb:cc`
    pub fn to_colon_notation(&self) -> String {
        self.0
            .as_bytes()
            .chunks(2)
            .map(|pair| String::from_utf8_lossy(pair).into_owned())
            .collect::<Vec<_>>()
            .join(":")
    }
}

/// Error returned when a string is not a valid MAC address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidMacAddress(pub String);

impl fmt::Display for InvalidMacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid MAC address: {:?}", self.0)
    }
}

impl std::error::Error for InvalidMacAddress {}

impl FromStr for MacAddress {
    type Err = InvalidMacAddress;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if !is_valid_mac_address(trimmed) {
            return Err(InvalidMacAddress(s.to_string()));
        }
        Ok(Self(normalize_mac_address(trimmed)))
    }
}

impl TryFrom<String> for MacAddress {
    type Error = InvalidMacAddress;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MacAddress> for String {
    fn from(mac: MacAddress) -> Self {
        mac.to_colon_notation()
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_colon_notation())
    }
}
