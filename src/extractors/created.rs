// src/extractors/created.rs

use std::fmt;

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::extractors::markers::FieldMarkers;

pub const MISSING_DATE: &str = "[No creation date]";
pub const INVALID_DATE: &str = "[Invalid creation date]";

const COMPACT_FORMAT: &str = "%Y%m%dT%H%M%S";
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// chrono accepts shorter numeric fields, so the exact shape is checked first.
static COMPACT_TIMESTAMP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{8}T[0-9]{6}$").expect("Failed to compile COMPACT_TIMESTAMP_RE")
});

/// Result of reading the DCREATED field. Never absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreationDate {
    Created(NaiveDateTime),
    Missing,
    Invalid,
}

impl fmt::Display for CreationDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreationDate::Created(dt) => write!(f, "{}", dt.format(DISPLAY_FORMAT)),
            CreationDate::Missing => f.write_str(MISSING_DATE),
            CreationDate::Invalid => f.write_str(INVALID_DATE),
        }
    }
}

/// Reads the creation timestamp (`YYYYMMDDTHHMMSS`) from a VNOTE file.
pub fn extract_created(content: &str, markers: &FieldMarkers) -> CreationDate {
    let raw = match find_line_value(content, &markers.created) {
        Some(value) => value.trim(),
        None => return CreationDate::Missing,
    };

    if raw.is_empty() {
        return CreationDate::Missing;
    }

    parse_compact_timestamp(raw)
}

fn parse_compact_timestamp(raw: &str) -> CreationDate {
    if !COMPACT_TIMESTAMP_RE.is_match(raw) {
        tracing::debug!("DCREATED value '{}' does not match {}", raw, COMPACT_FORMAT);
        return CreationDate::Invalid;
    }

    match NaiveDateTime::parse_from_str(raw, COMPACT_FORMAT) {
        Ok(dt) => CreationDate::Created(dt),
        Err(e) => {
            tracing::debug!("DCREATED value '{}' is out of range: {}", raw, e);
            CreationDate::Invalid
        }
    }
}

/// Returns the remainder of the first line that starts with `marker`.
fn find_line_value<'a>(content: &'a str, marker: &str) -> Option<&'a str> {
    let start = if content.starts_with(marker) {
        0
    } else {
        content.find(&format!("\n{}", marker))? + 1
    };
    let rest = &content[start + marker.len()..];
    Some(rest.lines().next().unwrap_or(""))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn created(content: &str) -> String {
        extract_created(content, &FieldMarkers::default()).to_string()
    }

    #[test]
    fn test_valid_timestamp() {
        assert_eq!(created("DCREATED:20230115T093000"), "2023-01-15 09:30:00");
        assert_eq!(
            created("BEGIN:VNOTE\r\nBODY;ENCODING=QUOTED-PRINTABLE;CHARSET=UTF-8:x\r\nDCREATED: 19991231T235959 \r\nEND:VNOTE\r\n"),
            "1999-12-31 23:59:59"
        );
    }

    #[test]
    fn test_missing_marker() {
        assert_eq!(created("BEGIN:VNOTE\nEND:VNOTE\n"), MISSING_DATE);
        assert_eq!(
            extract_created("", &FieldMarkers::default()),
            CreationDate::Missing
        );
    }

    #[test]
    fn test_empty_value_is_missing() {
        assert_eq!(created("BEGIN:VNOTE\nDCREATED:\nEND:VNOTE\n"), MISSING_DATE);
        assert_eq!(created("DCREATED:   "), MISSING_DATE);
    }

    #[test]
    fn test_invalid_values() {
        for value in [
            "notadate",
            "20230115",
            "20230115T0930",
            "20230115T093000Z",
            "2023115T093000",
            "20231301T000000",
            "20230230T120000",
            "20230115T250000",
            "2023-01-15T09:30:00",
        ] {
            assert_eq!(
                created(&format!("DCREATED:{}\n", value)),
                INVALID_DATE,
                "value: {}",
                value
            );
        }
    }

    #[test]
    fn test_marker_must_start_a_line() {
        // A DCREATED: string inside another line is not the field
        let content = "BODY;ENCODING=QUOTED-PRINTABLE;CHARSET=UTF-8:see DCREATED:20230115T093000\nEND:VNOTE\n";
        assert_eq!(created(content), MISSING_DATE);
    }
}
