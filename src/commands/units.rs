use anyhow::{Context, Result};
use serde::Serialize;

use crate::OutputFormat;
use crate::i18n::Language;
use crate::units::Unit;

#[derive(Debug, Serialize)]
struct UnitRow {
    unit: Unit,
    name: &'static str,
    seconds: u64,
}

/// Lists the six units in canonical order with their length in seconds.
pub fn render(language: Language, format: OutputFormat) -> Result<String> {
    let t = language.strings();
    let rows: Vec<UnitRow> = Unit::ALL
        .iter()
        .map(|&unit| UnitRow {
            unit,
            name: t.unit_name(unit),
            seconds: unit.seconds(),
        })
        .collect();

    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&rows).context("Failed to serialize units")
        }
        OutputFormat::Text => Ok(rows
            .iter()
            .map(|row| format!("{:<8} {:>10}  {}", row.unit.id(), row.seconds, row.name))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

pub fn list(language: Language, format: OutputFormat) -> Result<()> {
    println!("{}", render(language, format)?);
    Ok(())
}
