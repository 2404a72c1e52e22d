// src/extractors/body.rs

use crate::decoder::decode_quoted_printable;
use crate::extractors::markers::FieldMarkers;
use crate::utils::error::ExtractError;

/// Locates the quoted-printable BODY field and returns its decoded text.
///
/// The body runs from the end of the BODY marker up to the next line starting
/// with the created marker, else the next line starting with the end marker,
/// else the end of the content.
pub fn extract_body(content: &str, markers: &FieldMarkers) -> Result<String, ExtractError> {
    let marker_pos = content
        .find(&markers.body)
        .ok_or_else(|| ExtractError::FieldNotFound(markers.body.clone()))?;
    let rest = &content[marker_pos + markers.body.len()..];

    let body_end = rest
        .find(&format!("\n{}", markers.created))
        .or_else(|| rest.find(&format!("\n{}", markers.end)))
        .unwrap_or_else(|| {
            tracing::debug!("No terminator found after BODY, reading to end of content");
            rest.len()
        });

    let encoded = rest[..body_end].replace("=\n", "").replace("=\r\n", "");
    let encoded = encoded.trim();
    tracing::trace!("Encoded body slice is {} bytes", encoded.len());

    Ok(decode_quoted_printable(encoded))
}
