use thiserror::Error;

/// Failure of a single API call. `Display` is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never reached the server or the response never came back
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("{message}")]
    Http { status: u16, message: String },

    /// A success response whose body did not have the expected shape
    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Could not encode request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Build an HTTP error from a status and the raw response body.
    ///
    /// Uses the body's `detail` when it is a string, joins the `msg` entries
    /// when it is a validation list, and otherwise falls back to the status.
    /// A body that is not JSON counts as an empty object.
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed: serde_json::Value = serde_json::from_str(body).unwrap_or_default();
        let message = match parsed.get("detail") {
            Some(serde_json::Value::String(detail)) if !detail.is_empty() => Some(detail.clone()),
            Some(serde_json::Value::Array(entries)) => {
                let msgs: Vec<&str> = entries
                    .iter()
                    .filter_map(|entry| entry.get("msg").and_then(|m| m.as_str()))
                    .collect();
                (!msgs.is_empty()).then(|| msgs.join("; "))
            }
            _ => None,
        };

        ApiError::Http {
            status,
            message: message.unwrap_or_else(|| format!("Request failed: {}", status)),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
