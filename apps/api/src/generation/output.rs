//! Provider output normalization.
//!
//! The prediction `output` field is polymorphic across providers and model
//! versions: a plain URL string, an array of URLs, or a file object that
//! carries the URL (sometimes nested one level deeper in SDK-shaped
//! payloads). One ordered strategy chain turns all of them into a string.

use serde_json::Value;

use crate::errors::AppError;

/// Extracts the artifact URL from a terminal `succeeded` output.
///
/// Strategy order: string passthrough, first array element, object `url`
/// field (both recursing), scalar stringify as last resort. Null, an empty
/// array or a url-less object is an extraction failure: the job succeeded
/// but left nothing we recognize.
pub fn normalize(output: &Value) -> Result<String, AppError> {
    match output {
        Value::String(url) => Ok(url.clone()),
        Value::Array(items) => items
            .first()
            .ok_or_else(|| AppError::Extraction("provider returned an empty output array".to_string()))
            .and_then(normalize),
        Value::Object(map) => map
            .get("url")
            .ok_or_else(|| {
                AppError::Extraction("provider output object has no url field".to_string())
            })
            .and_then(normalize),
        Value::Null => Err(AppError::Extraction(
            "provider returned no output for a succeeded job".to_string(),
        )),
        other => Ok(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_string_passes_through() {
        assert_eq!(normalize(&json!("http://x")).unwrap(), "http://x");
    }

    #[test]
    fn test_array_takes_first_element() {
        assert_eq!(
            normalize(&json!(["http://x", "http://y"])).unwrap(),
            "http://x"
        );
    }

    #[test]
    fn test_object_url_property() {
        assert_eq!(normalize(&json!({"url": "http://x"})).unwrap(), "http://x");
    }

    #[test]
    fn test_nested_file_object_url() {
        // SDK file objects expose the URL behind another object.
        assert_eq!(
            normalize(&json!({"url": {"url": "http://x"}})).unwrap(),
            "http://x"
        );
    }

    #[test]
    fn test_all_supported_shapes_agree() {
        let shapes = [
            json!("http://x"),
            json!(["http://x"]),
            json!({"url": "http://x"}),
            json!({"url": {"url": "http://x"}}),
        ];
        for shape in &shapes {
            assert_eq!(normalize(shape).unwrap(), "http://x", "shape {shape}");
        }
    }

    #[test]
    fn test_scalar_stringify_fallback() {
        assert_eq!(normalize(&json!(42)).unwrap(), "42");
    }

    #[test]
    fn test_null_is_extraction_error() {
        assert!(matches!(
            normalize(&Value::Null),
            Err(AppError::Extraction(_))
        ));
    }

    #[test]
    fn test_empty_array_is_extraction_error() {
        assert!(matches!(
            normalize(&json!([])),
            Err(AppError::Extraction(_))
        ));
    }

    #[test]
    fn test_urlless_object_is_extraction_error() {
        assert!(matches!(
            normalize(&json!({"path": "/tmp/img.png"})),
            Err(AppError::Extraction(_))
        ));
    }
}
