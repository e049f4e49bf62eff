//! Octet codec.
//!
//! Converts between decimal octets and fixed-width 8-bit binary strings, and
//! validates dotted-decimal IPv4 text into an [`Ipv4Addr`].

use crate::error::SubnetError;
use itertools::Itertools;
use std::net::Ipv4Addr;
use std::num::IntErrorKind;

/// Largest decimal value an octet can hold.
pub const MAX_OCTET: i64 = 255;

/// Render `n` as 8 binary digits, most-significant bit first.
///
/// # Examples
/// ```
/// use sncalc::models::decimal_to_binary8;
/// assert_eq!(decimal_to_binary8(192).unwrap(), "11000000");
/// assert_eq!(decimal_to_binary8(5).unwrap(), "00000101");
/// assert!(decimal_to_binary8(256).is_err());
/// ```
pub fn decimal_to_binary8(n: i64) -> Result<String, SubnetError> {
    if !(0..=MAX_OCTET).contains(&n) {
        return Err(SubnetError::Range(format!(
            "Octet value {n} is outside 0-{MAX_OCTET}"
        )));
    }
    Ok(format!("{n:08b}"))
}

/// Decode exactly 8 binary digits back into an octet.
pub fn binary8_to_decimal(bits: &str) -> Result<u8, SubnetError> {
    if bits.len() != 8 || !bits.chars().all(|c| c == '0' || c == '1') {
        return Err(SubnetError::Format(format!(
            "Expected 8 binary digits, got '{bits}'"
        )));
    }
    u8::from_str_radix(bits, 2).map_err(|e| SubnetError::Format(format!("'{bits}': {e}")))
}

/// Parse dotted-decimal text into an address.
///
/// The text must split on `.` into exactly four numeric components, otherwise
/// [`SubnetError::Format`]. Any component above 255 (or below 0) is a
/// [`SubnetError::Range`].
///
/// # Examples
/// ```
/// use sncalc::models::validate_address;
/// use std::net::Ipv4Addr;
/// assert_eq!(validate_address("192.168.1.0").unwrap(), Ipv4Addr::new(192, 168, 1, 0));
/// assert!(validate_address("192.168.1").unwrap_err().is_format());
/// assert!(validate_address("192.168.1.256").unwrap_err().is_range());
/// ```
pub fn validate_address(text: &str) -> Result<Ipv4Addr, SubnetError> {
    let parts: Vec<&str> = text.split('.').collect();
    if parts.len() != 4 {
        return Err(SubnetError::Format(format!(
            "Address '{text}' must have 4 octets, found {}",
            parts.len()
        )));
    }

    let mut values = [0i64; 4];
    for (value, part) in values.iter_mut().zip(&parts) {
        *value = part.parse::<i64>().map_err(|e| match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                SubnetError::Range("Max octet decimal value can be 255.".to_string())
            }
            _ => SubnetError::Format(format!("Octet '{part}' in '{text}' is not numeric")),
        })?;
    }

    if values.iter().any(|v| *v > MAX_OCTET) {
        return Err(SubnetError::Range(
            "Max octet decimal value can be 255.".to_string(),
        ));
    }
    if values.iter().any(|v| *v < 0) {
        return Err(SubnetError::Range(format!(
            "Negative octet in address '{text}'"
        )));
    }

    // Range checked above, the narrowing cannot truncate.
    let [a, b, c, d] = values.map(|v| v as u8);
    let addr = Ipv4Addr::new(a, b, c, d);
    log::debug!("validate_address({text}) -> {addr}");
    Ok(addr)
}

/// Join four octets as dotted-decimal text.
pub fn render_address(octets: [u8; 4]) -> String {
    octets.iter().join(".")
}

/// Dot-joined 8-bit groups of an address, e.g. `11000000.10101000.00000001.00000000`.
pub fn binary_octets(addr: Ipv4Addr) -> Result<String, SubnetError> {
    let groups = addr
        .octets()
        .iter()
        .map(|o| decimal_to_binary8(i64::from(*o)))
        .collect::<Result<Vec<String>, SubnetError>>()?;
    Ok(groups.join("."))
}
