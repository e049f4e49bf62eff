//! Aggregation of every derived fact for one address/prefix pair.

use super::enumerate::{enumerate_subnets, SubnetEnumeration};
use super::hosts::{host_capacity, HostCapacity, MAX_NETWORK_BITS_FOR_USEFUL_HOSTS};
use crate::error::SubnetError;
use crate::models::{binary_octets, derive_mask, validate_address, HostRange, Ipv4, MaskInfo};
use serde::Serialize;
use std::net::Ipv4Addr;

/// All facts computed for one input. Rebuilt from scratch on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultSet {
    pub input: Ipv4,
    pub binary_octets: String,
    pub mask: MaskInfo,
    pub hosts: HostCapacity,
    pub subnets: SubnetEnumeration,
}

/// Validate `address`, derive the mask for `prefix`, count hosts and enumerate subnets.
///
/// # Examples
/// ```
/// let result = sncalc::calculate("192.168.1.0", 26).unwrap();
/// assert_eq!(result.mask.subnet_mask.to_string(), "255.255.255.192");
/// assert_eq!(result.hosts.usable_hosts, 62);
/// assert_eq!(result.subnets.number_of_subnets, 4);
/// ```
pub fn calculate(address: &str, prefix: u8) -> Result<ResultSet, SubnetError> {
    log::info!("#Start calculate({address}/{prefix})");
    let addr = validate_address(address)?;
    let input = Ipv4::from_parts(addr, prefix)?;
    let mask = derive_mask(prefix)?;
    let hosts = host_capacity(prefix)?;
    let subnets = enumerate_subnets(addr, mask.subnet_mask, prefix)?;
    if let Some(current) = subnets.current {
        let (lo, hi) = (input.lo()?, input.hi()?);
        if (current.network, current.broadcast) != (lo, hi) {
            log::warn!("Current subnet {current} differs from {input} span {lo} - {hi}");
        }
    }
    log::info!(
        "# {input}: {} subnets, {} usable hosts each",
        subnets.number_of_subnets,
        hosts.usable_hosts
    );

    Ok(ResultSet {
        input,
        binary_octets: binary_octets(addr)?,
        mask,
        hosts,
        subnets,
    })
}

impl ResultSet {
    pub fn ip_address(&self) -> Ipv4Addr {
        self.input.addr
    }

    pub fn prefix(&self) -> u8 {
        self.input.mask
    }

    pub fn network_address(&self) -> Option<Ipv4Addr> {
        self.subnets.current.map(|r| r.network)
    }

    pub fn usable_host_range(&self) -> Option<HostRange> {
        self.subnets.current.map(|r| r.hosts)
    }

    pub fn broadcast_address(&self) -> Option<Ipv4Addr> {
        self.subnets.current.map(|r| r.broadcast)
    }

    /// Labelled facts in report order.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let or_blank = |v: Option<String>| v.unwrap_or_default();
        vec![
            ("IP Address", self.ip_address().to_string()),
            (
                "Network Address",
                or_blank(self.network_address().map(|a| a.to_string())),
            ),
            (
                "Usable Host IP Range",
                or_blank(self.usable_host_range().map(|r| r.to_string())),
            ),
            (
                "Broadcast Address",
                or_blank(self.broadcast_address().map(|a| a.to_string())),
            ),
            ("Total Hosts per Subnet", self.total_hosts_text()),
            ("Usable Hosts per Subnet", self.usable_hosts_text()),
            ("Subnet Mask", self.mask.subnet_mask.to_string()),
            ("Wildcard Mask", self.mask.wildcard_mask.to_string()),
            ("Binary Subnet Mask", self.mask.binary_subnet_mask.clone()),
            ("CIDR Notation", self.mask.cidr_notation.clone()),
            ("Binary Octets", self.binary_octets.clone()),
            (
                "Network Bits (total masked bits)",
                self.mask.network_bits.to_string(),
            ),
            (
                "Hosts Bits (unmasked bits)",
                self.mask.host_bits.to_string(),
            ),
        ]
    }

    fn total_hosts_text(&self) -> String {
        let h = &self.hosts;
        if h.total_hosts == 0 {
            return "0".to_string();
        }
        format!(
            "{}   (2^unmasked bits) => (2^{})",
            h.total_hosts, h.unmasked_bits
        )
    }

    fn usable_hosts_text(&self) -> String {
        let h = &self.hosts;
        if self.prefix() > MAX_NETWORK_BITS_FOR_USEFUL_HOSTS {
            return "0".to_string();
        }
        format!(
            "{}   (2^unmasked bits - 2) => (2^{} - 2)",
            h.usable_hosts, h.unmasked_bits
        )
    }

    /// e.g. `4   (2^masked bits on 4th octet) => (2^2)`, or `0` without a boundary.
    pub fn number_of_subnets_text(&self) -> String {
        let s = &self.subnets;
        match s.boundary {
            Some(boundary) => format!(
                "{}   (2^masked bits on {} octet) => (2^{})",
                s.number_of_subnets,
                boundary.ordinal(),
                s.masked_bits
            ),
            None => "0".to_string(),
        }
    }

    /// Title line above the subnet table, `None` when the table is empty.
    pub fn subnet_list_heading(&self) -> Option<String> {
        let boundary = self.subnets.boundary?;
        let count = self.subnets.number_of_subnets;
        let prefix = self.prefix();
        let scope = match boundary.network_template(self.ip_address()) {
            Some(template) => format!(" for {template}"),
            None => String::new(),
        };
        Some(format!(
            "All {count} of the Possible /{prefix} Networks{scope} (valid subnets at {} octet):",
            boundary.ordinal()
        ))
    }
}
