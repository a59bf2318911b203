//! Cell canonicalization.
//!
//! Metadata comes from TSV files (typed by Polars schema inference) and from
//! spreadsheets (typed by the workbook). Join keys must compare equal across
//! both, so every cell is rendered to the same textual form: integers without
//! a decimal point, floats without trailing zeros, empty strings as null.

use calamine::Data;
use chrono::NaiveTime;
use polars::prelude::AnyValue;

/// Converts a Polars `AnyValue` to its canonical text form.
///
/// Returns an empty string for `Null`.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => if b { "True" } else { "False" }.to_string(),
        other => other.to_string(),
    }
}

/// Like [`any_to_string`], but blank values become `None`.
pub fn any_to_string_non_empty(value: AnyValue<'_>) -> Option<String> {
    let s = any_to_string(value);
    if s.trim().is_empty() { None } else { Some(s) }
}

/// Formats a float without trailing zeros; integral values print as integers.
pub fn format_numeric(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 {
        // Integral and within i64 range, so the cast is exact.
        return format!("{}", v as i64);
    }
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Canonical text of a spreadsheet cell; `None` for empty and error cells.
pub(crate) fn cell_to_string(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::Empty | Data::Error(_) => return None,
        Data::String(s) => s.clone(),
        Data::Int(v) => v.to_string(),
        Data::Float(v) => format_numeric(*v),
        Data::Bool(b) => if *b { "True" } else { "False" }.to_string(),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(value) if value.time() == NaiveTime::MIN => value.format("%Y-%m-%d").to_string(),
            Some(value) => value.format("%Y-%m-%dT%H:%M:%S").to_string(),
            None => format_numeric(dt.as_f64()),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
    };
    if text.trim().is_empty() { None } else { Some(text) }
}
