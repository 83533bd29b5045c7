//! Extraction of user-facing messages from API error bodies.

/// Fallback when an error body carries nothing usable.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Extract a displayable message from an error response body.
///
/// The API emits failures in one of two shapes:
/// `{ "errors": { field: [msg, ...] } }` or `{ "message": "..." }`.
/// Precedence is `errors` first (every field's messages flattened and
/// newline-joined), then `message`, then the generic fallback. The order
/// is load-bearing: validation responses carry both keys and the field
/// detail is the one users need.
pub fn extract_error_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return GENERIC_ERROR_MESSAGE.to_string();
    };

    if let Some(errors) = value.get("errors").and_then(|e| e.as_object()) {
        let mut lines = Vec::new();
        for field_messages in errors.values() {
            match field_messages {
                serde_json::Value::Array(messages) => {
                    lines.extend(
                        messages
                            .iter()
                            .filter_map(|m| m.as_str().map(String::from)),
                    );
                }
                // Some endpoints send a bare string per field.
                serde_json::Value::String(message) => lines.push(message.clone()),
                _ => {}
            }
        }
        if !lines.is_empty() {
            return lines.join("\n");
        }
    }

    if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
        if !message.is_empty() {
            return message.to_string();
        }
    }

    GENERIC_ERROR_MESSAGE.to_string()
}
