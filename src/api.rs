//! The shape of the animals REST API: endpoint URLs and error bodies.
//!
//! The fetch layer lives in the `wasm-ui` crate; what lives here is
//! everything about the API that can be checked without a browser: how
//! URLs are formed and how a failed create's body is read.

use serde::Deserialize;

use crate::animal::AnimalId;

/// `GET`/`POST` collection endpoint.
pub fn animals_url(base: &str) -> String {
    format!("{}/animals", base.trim_end_matches('/'))
}

/// `GET` per-species tally endpoint.
pub fn species_url(base: &str) -> String {
    format!("{}/animals/bySpecies", base.trim_end_matches('/'))
}

/// `DELETE` endpoint for one animal.
pub fn animal_url(base: &str, id: AnimalId) -> String {
    format!("{}/animals/{}", base.trim_end_matches('/'), id)
}

/// Error body of a rejected create: `{"message": ["...", ...]}`.
///
/// The backend validates create payloads and reports every failure in a
/// `message` array; a plain-string `message` is accepted too since
/// framework error pages use it for single errors.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Messages,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Messages {
    Many(Vec<String>),
    One(String),
}

/// Extract the server's validation text from a failed-create body.
///
/// Multiple messages join with `", "`. Returns `None` when the body is
/// not JSON of the expected shape (or the list is empty), in which case
/// the caller falls back to its generic message.
pub fn validation_messages(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.message {
        Messages::Many(list) if list.is_empty() => None,
        Messages::Many(list) => Some(list.join(", ")),
        Messages::One(text) => Some(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://localhost:3000";

    // --- URLs ---

    #[test]
    fn test_collection_and_tally_urls() {
        assert_eq!(animals_url(BASE), "http://localhost:3000/animals");
        assert_eq!(species_url(BASE), "http://localhost:3000/animals/bySpecies");
    }

    #[test]
    fn test_delete_url_carries_id() {
        assert_eq!(animal_url(BASE, 42), "http://localhost:3000/animals/42");
    }

    #[test]
    fn test_trailing_slash_base_does_not_double() {
        assert_eq!(
            animals_url("http://localhost:3000/"),
            "http://localhost:3000/animals"
        );
    }

    // --- Error bodies ---

    #[test]
    fn test_message_list_joins() {
        let body = r#"{"message":["name should not be empty","age must be a number"],"statusCode":400}"#;
        assert_eq!(
            validation_messages(body),
            Some("name should not be empty, age must be a number".to_string())
        );
    }

    #[test]
    fn test_single_message_passes_through() {
        let body = r#"{"message":["species should not be empty"]}"#;
        assert_eq!(
            validation_messages(body),
            Some("species should not be empty".to_string())
        );
    }

    #[test]
    fn test_string_message_is_accepted() {
        let body = r#"{"message":"Internal server error","statusCode":500}"#;
        assert_eq!(
            validation_messages(body),
            Some("Internal server error".to_string())
        );
    }

    #[test]
    fn test_empty_list_falls_back() {
        assert_eq!(validation_messages(r#"{"message":[]}"#), None);
    }

    #[test]
    fn test_non_json_body_falls_back() {
        assert_eq!(validation_messages("<html>502 Bad Gateway</html>"), None);
        assert_eq!(validation_messages(""), None);
    }

    #[test]
    fn test_unexpected_shape_falls_back() {
        assert_eq!(validation_messages(r#"{"error":"nope"}"#), None);
    }
}
