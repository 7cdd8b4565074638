use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Body returned to HTTP callers when a request cannot be served.
///
/// Carries no detail about which upstream failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    pub status: u16,
}

impl ErrorBody {
    pub fn for_status(status: StatusCode) -> Self {
        let message = if status == StatusCode::BAD_REQUEST {
            "Bad request"
        } else {
            "Internal server error"
        };

        Self {
            message: message.to_string(),
            status: status.as_u16(),
        }
    }
}
