//! Terminal output.
//!
//! Fixed-width report of every fact in a [`ResultSet`], followed by the subnet table.

use crate::models::SubnetRecord;
use crate::processing::ResultSet;
use colored::Colorize;
use std::fmt::{self, Write};

/// Width of the label column in the facts block.
const LABEL_WIDTH: usize = 40;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// One subnet table line: network, usable range and broadcast in 20/40 column slots.
pub fn format_subnet_row(network: &str, hosts: &str, broadcast: &str) -> String {
    format!("  {network:<20} {hosts:<40} {broadcast}")
}

fn record_row(record: &SubnetRecord, color: bool) -> String {
    let row = format_subnet_row(
        &record.network.to_string(),
        &record.hosts.to_string(),
        &record.broadcast.to_string(),
    );
    match (record.current, color) {
        (true, true) => format!("{} {}", row.green().bold(), "[current]".on_green()),
        (true, false) => format!("{row} [current]"),
        (false, _) => row,
    }
}

/// Build the full text report.
pub fn render_report(result: &ResultSet, color: bool) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_report(&mut out, result, color)?;
    Ok(out)
}

fn write_report(out: &mut String, result: &ResultSet, color: bool) -> fmt::Result {
    writeln!(out)?;
    for (label, value) in result.fields() {
        writeln!(out, "{label:<LABEL_WIDTH$}: {value}")?;
    }
    writeln!(out)?;
    writeln!(out)?;

    let count = result.number_of_subnets_text();
    if color {
        writeln!(out, "{}: {count}", "Number of Subnets".bold())?;
    } else {
        writeln!(out, "Number of Subnets: {count}")?;
    }
    if let Some(heading) = result.subnet_list_heading() {
        writeln!(out, "{heading}")?;
    }
    writeln!(
        out,
        "{}",
        format_subnet_row("Network Address", "Usable Host Range", "Broadcast Address")
    )?;
    writeln!(
        out,
        "{}",
        format_subnet_row("---------------", "-----------------", "-----------------")
    )?;
    for record in &result.subnets.records {
        writeln!(out, "{}", record_row(record, color))?;
    }
    writeln!(out)
}
