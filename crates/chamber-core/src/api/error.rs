use thiserror::Error;

/// Failure to produce a member collection from a data source.
///
/// A document that parses but has an unrecognized shape is not an error;
/// it loads as an empty collection.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to fetch {resource}{}: {message}", status_suffix(.status))]
    Fetch {
        resource: String,
        status: Option<u16>,
        message: String,
    },

    #[error("Invalid JSON in {resource}: {message}")]
    Parse { resource: String, message: String },
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (status {})", s)).unwrap_or_default()
}

impl LoadError {
    /// Truncate a response body to avoid logging excessive data
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            let mut end = MAX_ERROR_BODY_LENGTH;
            while !body.is_char_boundary(end) {
                end -= 1;
            }
            format!("{}... (truncated, {} total bytes)", &body[..end], body.len())
        }
    }

    pub fn from_status(resource: &str, status: reqwest::StatusCode, body: &str) -> Self {
        let truncated = Self::truncate_body(body.trim());
        let message = if truncated.is_empty() {
            status
                .canonical_reason()
                .unwrap_or("unexpected status")
                .to_string()
        } else {
            truncated
        };
        LoadError::Fetch {
            resource: resource.to_string(),
            status: Some(status.as_u16()),
            message,
        }
    }

    pub fn resource(&self) -> &str {
        match self {
            LoadError::Fetch { resource, .. } | LoadError::Parse { resource, .. } => resource,
        }
    }

    /// HTTP status reported by the server, if the failure got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            LoadError::Fetch { status, .. } => *status,
            LoadError::Parse { .. } => None,
        }
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, LoadError::Parse { .. })
    }
}
