//! CSV output of the subnet table.

use crate::models::SubnetRecord;
use crate::processing::ResultSet;
use std::fmt::{self, Write};

use super::terminal::format_field;

const ADDR_WIDTH: usize = 17;
const FLAG_WIDTH: usize = 11;

/// Render the subnet table as CSV, one row per subnet in table order.
pub fn render_csv(result: &ResultSet) -> Result<String, fmt::Error> {
    log::info!(
        "#Start render_csv() {} rows for {}",
        result.subnets.records.len(),
        result.input
    );
    let mut out = String::new();
    writeln!(
        out,
        "{},{},{},{},{}",
        format_field("network", ADDR_WIDTH),
        format_field("first_host", ADDR_WIDTH),
        format_field("last_host", ADDR_WIDTH),
        format_field("broadcast", ADDR_WIDTH),
        format_field("current", FLAG_WIDTH),
    )?;
    for record in &result.subnets.records {
        writeln!(out, "{}", csv_row(record))?;
    }
    Ok(out)
}

fn csv_row(record: &SubnetRecord) -> String {
    format!(
        "{network},{first},{last},{broadcast},{current}",
        network = format_field(record.network, ADDR_WIDTH),
        first = format_field(record.hosts.start, ADDR_WIDTH),
        last = format_field(record.hosts.end, ADDR_WIDTH),
        broadcast = format_field(record.broadcast, ADDR_WIDTH),
        current = format_field(record.current, FLAG_WIDTH),
    )
}
