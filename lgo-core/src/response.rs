//! Turning a raw HTTP response into a typed body.
//!
//! Both the browser client and the CLI hand the status code and body text
//! here, so non-2xx and malformed-JSON handling is the same everywhere.

use crate::error::{FetchError, Result};
use serde::de::DeserializeOwned;

/// Longest body excerpt kept in a [`FetchError::Status`].
const MAX_ERROR_BODY: usize = 200;

pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T> {
    if !(200..300).contains(&status) {
        return Err(FetchError::Status {
            status,
            body: truncate(body.trim(), MAX_ERROR_BODY),
        });
    }
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}

fn truncate(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ParetoRow;

    #[test]
    fn decodes_success_body() {
        let rows: Vec<ParetoRow> = decode_response(
            200,
            r#"[{"Geographical Description": "York", "Measure_Value": 12.5}]"#,
        )
        .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].geography, "York");
    }

    #[test]
    fn non_success_status_is_an_error() {
        let err = decode_response::<Vec<String>>(400, r#"{"error": "No measure provided"}"#)
            .unwrap_err();
        assert_eq!(
            err,
            FetchError::Status {
                status: 400,
                body: r#"{"error": "No measure provided"}"#.to_string()
            }
        );

        let err = decode_response::<Vec<String>>(500, "").unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 500, .. }));
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let err = decode_response::<Vec<String>>(200, "<html>oops</html>").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));

        // Right JSON, wrong shape
        let err = decode_response::<Vec<String>>(200, r#"{"summary": "x"}"#).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn long_error_bodies_are_truncated() {
        let body = "x".repeat(500);
        match decode_response::<Vec<String>>(502, &body).unwrap_err() {
            FetchError::Status { body, .. } => assert_eq!(body.len(), MAX_ERROR_BODY + 3),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
