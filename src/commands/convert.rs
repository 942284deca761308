use anyhow::{Context, Result};
use serde::Serialize;
use std::process::ExitCode;
use tracing::debug;

use crate::OutputFormat;
use crate::convert::{ConversionResult, convert};
use crate::format::format_decimal;
use crate::i18n::Language;
use crate::shell::render_result;
use crate::units::Unit;
use crate::validate::{InputState, validate};

#[derive(Debug, Serialize)]
struct JsonConversion {
    input: String,
    unit: Unit,
    total_seconds: String,
    results: Vec<JsonEntry>,
}

#[derive(Debug, Serialize)]
struct JsonEntry {
    unit: Unit,
    name: &'static str,
    value: String,
}

fn to_json(result: &ConversionResult, language: Language) -> JsonConversion {
    let t = language.strings();
    let source = result.source();
    JsonConversion {
        input: format_decimal(source.value),
        unit: source.unit,
        total_seconds: format_decimal(result.total_seconds()),
        results: result
            .iter()
            .map(|(unit, value)| JsonEntry {
                unit,
                name: t.unit_name(unit),
                value: format_decimal(value),
            })
            .collect(),
    }
}

/// Converts `raw` and renders the output area, or fails with the
/// translated invalid-value message.
pub fn render(raw: &str, unit: Unit, language: Language, format: OutputFormat) -> Result<String> {
    let value = match validate(raw) {
        InputState::Valid(value) => value,
        state => {
            debug!(input = raw, ?state, "rejected input");
            anyhow::bail!("{}", language.strings().error_invalid);
        }
    };

    let result = convert(value, unit);
    debug!(%unit, total_seconds = %result.total_seconds(), "converted");

    match format {
        OutputFormat::Text => Ok(render_result(&result, language)),
        OutputFormat::Json => serde_json::to_string_pretty(&to_json(&result, language))
            .context("Failed to serialize conversion"),
    }
}

/// Prints the output area. Rejected input prints only the translated
/// message on stderr and yields a failure exit code.
pub fn run(raw: &str, unit: Unit, language: Language, format: OutputFormat) -> Result<ExitCode> {
    let state = validate(raw);
    if !state.is_valid() {
        debug!(input = raw, ?state, "rejected input");
        eprintln!("{}", language.strings().error_invalid);
        return Ok(ExitCode::FAILURE);
    }
    println!("{}", render(raw, unit, language, format)?);
    Ok(ExitCode::SUCCESS)
}
