// src/extractors/markers.rs

pub const BODY_MARKER: &str = "BODY;ENCODING=QUOTED-PRINTABLE;CHARSET=UTF-8:";
pub const CREATED_MARKER: &str = "DCREATED:";
pub const END_MARKER: &str = "END:VNOTE";

/// Field markers used to locate values inside a VNOTE file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMarkers {
    /// Prefix that opens the quoted-printable body, value follows directly.
    pub body: String,
    /// Prefix of the creation timestamp line. Also terminates the body.
    pub created: String,
    /// Closing line of the note, fallback terminator for the body.
    pub end: String,
}

impl Default for FieldMarkers {
    fn default() -> Self {
        Self {
            body: BODY_MARKER.to_string(),
            created: CREATED_MARKER.to_string(),
            end: END_MARKER.to_string(),
        }
    }
}
