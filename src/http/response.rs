//! Wire-level response shapes shared across handlers.

use serde::Serialize;

/// Error payload returned by every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}
