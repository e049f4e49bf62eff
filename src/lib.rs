//! IPv4 subnet calculator.
//!
//! Given an address and a CIDR prefix length, [`calculate`] derives the subnet
//! and wildcard masks, host counts, and the full table of sibling subnets at the
//! boundary octet with the input's own subnet flagged as current.
//!
//! ```
//! let result = sncalc::calculate("192.168.1.0", 26).unwrap();
//! assert_eq!(result.broadcast_address().unwrap().to_string(), "192.168.1.63");
//! ```

pub mod cli;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::SubnetError;
pub use processing::{calculate, ResultSet};
