//! Subnet mask derivation from a CIDR prefix length.

use super::ipv4::MAX_LENGTH;
use super::octet::binary8_to_decimal;
use crate::error::SubnetError;
use itertools::Itertools;
use serde::Serialize;
use std::net::Ipv4Addr;

/// Everything derived from the prefix length alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaskInfo {
    pub subnet_mask: Ipv4Addr,
    /// Dot-joined 8-bit groups, e.g. `11111111.11111111.11111111.11000000`.
    pub binary_subnet_mask: String,
    pub wildcard_mask: Ipv4Addr,
    /// `/p`
    pub cidr_notation: String,
    pub network_bits: u8,
    pub host_bits: u8,
}

/// Derive the subnet mask, its binary form and the wildcard mask for `prefix`.
///
/// The mask is built as a run of `prefix` ones followed by zeros, cut into four
/// 8-bit groups and decoded group by group.
///
/// # Examples
/// ```
/// use sncalc::models::derive_mask;
/// use std::net::Ipv4Addr;
/// let mask = derive_mask(26).unwrap();
/// assert_eq!(mask.subnet_mask, Ipv4Addr::new(255, 255, 255, 192));
/// assert_eq!(mask.wildcard_mask, Ipv4Addr::new(0, 0, 0, 63));
/// assert!(derive_mask(33).is_err());
/// ```
pub fn derive_mask(prefix: u8) -> Result<MaskInfo, SubnetError> {
    if prefix > MAX_LENGTH {
        return Err(SubnetError::Range(
            "Max network mask (bits) can be 32".to_string(),
        ));
    }

    let bits: String = (0..MAX_LENGTH)
        .map(|position| if position < prefix { '1' } else { '0' })
        .collect();
    let groups: Vec<&str> = (0..4).map(|o| &bits[o * 8..o * 8 + 8]).collect();

    let mut octets = [0u8; 4];
    for (octet, group) in octets.iter_mut().zip(&groups) {
        *octet = binary8_to_decimal(group)?;
    }
    let wildcard = octets.map(|o| o ^ u8::MAX);

    let info = MaskInfo {
        subnet_mask: Ipv4Addr::from(octets),
        binary_subnet_mask: groups.iter().join("."),
        wildcard_mask: Ipv4Addr::from(wildcard),
        cidr_notation: format!("/{prefix}"),
        network_bits: prefix,
        host_bits: MAX_LENGTH - prefix,
    };
    log::debug!(
        "derive_mask(/{prefix}) mask={} wildcard={}",
        info.subnet_mask,
        info.wildcard_mask
    );
    Ok(info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::get_cidr_mask;

    #[test]
    fn test_derive_mask_26() {
        let mask = derive_mask(26).unwrap();
        assert_eq!(mask.subnet_mask, Ipv4Addr::new(255, 255, 255, 192));
        assert_eq!(mask.wildcard_mask, Ipv4Addr::new(0, 0, 0, 63));
        assert_eq!(
            mask.binary_subnet_mask,
            "11111111.11111111.11111111.11000000"
        );
        assert_eq!(mask.cidr_notation, "/26");
        assert_eq!(mask.network_bits, 26);
        assert_eq!(mask.host_bits, 6);
    }

    #[test]
    fn test_derive_mask_edges() {
        let zero = derive_mask(0).unwrap();
        assert_eq!(zero.subnet_mask, Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(zero.wildcard_mask, Ipv4Addr::new(255, 255, 255, 255));
        assert_eq!(zero.host_bits, 32);

        let full = derive_mask(32).unwrap();
        assert_eq!(full.subnet_mask, Ipv4Addr::new(255, 255, 255, 255));
        assert_eq!(full.wildcard_mask, Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(full.host_bits, 0);

        let nine = derive_mask(9).unwrap();
        assert_eq!(nine.subnet_mask, Ipv4Addr::new(255, 128, 0, 0));
        assert_eq!(
            nine.binary_subnet_mask,
            "11111111.10000000.00000000.00000000"
        );
    }

    #[test]
    fn test_derive_mask_too_long() {
        let err = derive_mask(33).unwrap_err();
        assert!(err.is_range());
        assert_eq!(err.to_string(), "ERROR: Max network mask (bits) can be 32");
    }

    #[test]
    fn test_mask_xor_wildcard_is_all_ones() {
        for p in 0..=MAX_LENGTH {
            let mask = derive_mask(p).unwrap();
            let xor: Vec<u8> = mask
                .subnet_mask
                .octets()
                .iter()
                .zip(mask.wildcard_mask.octets())
                .map(|(m, w)| m ^ w)
                .collect();
            assert_eq!(xor, vec![255; 4], "complement failed for /{p}");
        }
    }

    #[test]
    fn test_binary_mask_decodes_to_mask() {
        for p in 0..=MAX_LENGTH {
            let mask = derive_mask(p).unwrap();
            let decoded: Vec<u8> = mask
                .binary_subnet_mask
                .split('.')
                .map(|g| binary8_to_decimal(g).unwrap())
                .collect();
            assert_eq!(decoded, mask.subnet_mask.octets().to_vec(), "/{p}");
            assert_eq!(u32::from(mask.subnet_mask), get_cidr_mask(p).unwrap());
        }
    }
}
