//! JSON encode/decode wrappers over `serde_json`.
//!
//! Decoding goes through a caller-chosen target type: the parsed fields are
//! materialized onto a fresh value of that type, which keeps every method of
//! the type available on the result.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// A JSON encode or decode failure, propagated from `serde_json`.
#[derive(Debug, Error)]
#[error("JSON error: {0}")]
pub struct JsonError(#[from] serde_json::Error);

/// Encode a value as JSON text.
///
/// Object keys appear in the order the type serializes its fields.
///
/// # Errors
///
/// Returns a [`JsonError`] if the value cannot be represented as JSON
/// (e.g. a map with non-string keys).
pub fn to_json<T: Serialize>(value: &T) -> Result<String, JsonError> {
    Ok(serde_json::to_string(value)?)
}

/// Decode JSON text into a value of type `T`.
///
/// # Errors
///
/// Returns a [`JsonError`] if the text is not valid JSON or does not match
/// the shape of `T`.
pub fn from_json<T: DeserializeOwned>(text: &str) -> Result<T, JsonError> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::{from_json, to_json};
    use crate::geometry::Rect;

    #[test]
    fn test_round_trip_preserves_fields_and_capabilities() {
        let rect = Rect::new(10.0, 20.0);
        let text = to_json(&rect).unwrap();
        let decoded: Rect = from_json(&text).unwrap();

        assert_eq!(decoded, rect);
        // The decoded value is a full Rect, methods included.
        assert!((decoded.area() - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_encode_uses_field_order() {
        let text = to_json(&Rect::new(1.0, 2.0)).unwrap();
        assert_eq!(text, r#"{"width":1.0,"height":2.0}"#);
    }

    #[test]
    fn test_decode_rejects_malformed_text() {
        let result: Result<Rect, _> = from_json("{\"width\": }");
        assert!(result.is_err());
    }
}
