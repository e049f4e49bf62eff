//! Output formatting for calculation results.
//!
//! This module handles rendering a [`ResultSet`] for the user:
//! - [`terminal`] - Fixed-width text report
//! - [`csv`] - CSV subnet table
//! - [`json`] - JSON dump of every fact

mod csv;
mod json;
mod terminal;

pub use csv::render_csv;
pub use json::render_json;
pub use terminal::{format_field, format_subnet_row, render_report};

use crate::processing::ResultSet;
use clap::ValueEnum;
use std::error::Error;

/// Report style selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

/// Render `result` in the requested format. `color` only affects text output.
pub fn render(
    result: &ResultSet,
    format: OutputFormat,
    color: bool,
) -> Result<String, Box<dyn Error>> {
    match format {
        OutputFormat::Text => Ok(render_report(result, color)?),
        OutputFormat::Csv => Ok(render_csv(result)?),
        OutputFormat::Json => render_json(result),
    }
}
