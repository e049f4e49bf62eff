//! Command-line arguments and run configuration.

use crate::error::SubnetError;
use crate::output::OutputFormat;
use clap::Parser;
use regex::Regex;
use std::num::IntErrorKind;
use std::sync::OnceLock;

pub const DEFAULT_ADDRESS: &str = "192.168.1.0";
pub const DEFAULT_PREFIX: u8 = 26;

/// Regex for splitting `address[/prefix]`.
static TARGET_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_target_regex() -> &'static Regex {
    TARGET_REGEX.get_or_init(|| {
        Regex::new(r"^\s*(?P<addr>[^/\s]*)\s*(?:/\s*(?P<prefix>\S*))?\s*$").expect("Invalid Regex")
    })
}

#[derive(Parser, Debug)]
#[command(name = "sncalc", version)]
#[command(about = "IPv4 subnet calculator: masks, host range and every sibling subnet.")]
pub struct Cli {
    /// IPv4 address in dotted decimal, optionally with a /prefix suffix
    #[arg(env = "SNCALC_ADDRESS", default_value = DEFAULT_ADDRESS)]
    pub address: String,
    /// CIDR prefix length, ignored when ADDRESS carries a /prefix
    #[arg(short, long, env = "SNCALC_PREFIX", default_value_t = DEFAULT_PREFIX)]
    pub prefix: u8,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,
}

/// Settings for one run, after resolving the address/prefix pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub address: String,
    pub prefix: u8,
    pub format: OutputFormat,
    pub color: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn into_config(self) -> Result<Config, SubnetError> {
        let (address, suffix) = split_target(&self.address)?;
        let prefix = suffix.unwrap_or(self.prefix);
        log::debug!("config address={address} prefix=/{prefix} format={:?}", self.format);
        Ok(Config {
            address,
            prefix,
            format: self.format,
            color: !self.no_color,
        })
    }
}

/// Split `a.b.c.d/p` into the address text and the optional prefix.
///
/// The address part is returned unvalidated. A non-numeric prefix is a
/// [`SubnetError::Format`], one too large for a byte a [`SubnetError::Range`].
pub fn split_target(text: &str) -> Result<(String, Option<u8>), SubnetError> {
    let caps = get_target_regex()
        .captures(text)
        .ok_or_else(|| SubnetError::Format(format!("Cannot read address '{text}'")))?;
    let address = caps["addr"].to_string();

    let prefix = match caps.name("prefix") {
        Some(m) => Some(m.as_str().parse::<u8>().map_err(|e| match e.kind() {
            IntErrorKind::PosOverflow => {
                SubnetError::Range("Max network mask (bits) can be 32".to_string())
            }
            _ => SubnetError::Format(format!("Invalid prefix length '{}'", m.as_str())),
        })?),
        None => None,
    };
    Ok((address, prefix))
}
