//! User entity and request payloads.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Matches `local@domain.tld`: no whitespace or extra `@` on either side of
/// the separator, and at least one dot in the domain part.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// A stored user record.
///
/// The `id` is assigned by the store, is unique for the lifetime of the
/// process, and is never reused after deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// Payload for `POST /users`.
///
/// Both fields are optional at the boundary so that absent input surfaces
/// as a domain validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUser {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Payload for `PUT /users/{id}`.
///
/// Absent fields leave the stored value untouched. Blank strings are
/// treated the same as absent, not as a request to clear the field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Check an email address against the accepted shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}
