use serde::{Deserialize, Serialize};

/// Error body the backend attaches to non-2xx responses.
///
/// Every field is optional: some endpoints answer with an empty body or with
/// framework-generated JSON that only carries `error`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Best available human-readable message, ignoring blank strings
    pub fn best_message(&self) -> Option<&str> {
        [self.message.as_deref(), self.error.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|m| !m.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_message_over_error() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"message":"Name taken","error":"Bad Request"}"#).unwrap();
        assert_eq!(body.best_message(), Some("Name taken"));
    }

    #[test]
    fn falls_back_to_error_field_and_skips_blank() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"message":"  ","error":"Conflict"}"#).unwrap();
        assert_eq!(body.best_message(), Some("Conflict"));
        assert_eq!(ErrorBody::default().best_message(), None);
    }
}
