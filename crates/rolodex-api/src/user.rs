//! Wire model for directory user records.
//!
//! Field names follow the upstream contract exactly, including its one
//! inconsistency: the bio field is capitalized as `Bio` on the wire while
//! every other field is camelCase. The serde renames keep the external
//! names intact; the Rust side uses conventional snake_case.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Nested profile record carried by every user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Username, used as both sort key and search key
    pub username: String,
    /// Given name
    #[serde(rename = "firstName")]
    pub first_name: String,
    /// Family name
    #[serde(rename = "lastName")]
    pub last_name: String,
    /// Contact email address
    pub email: String,
}

/// One directory entry.
///
/// Records are immutable once loaded: the application only filters over
/// and selects them, never mutates one in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque unique identifier, stable for the record's lifetime
    pub id: String,
    /// Creation timestamp; opaque display text, never parsed
    #[serde(rename = "createdAt")]
    pub created_at: String,
    /// URL of the avatar image resource
    #[serde(rename = "avatar")]
    pub avatar_url: String,
    /// Free-text biography (wire name is `Bio`, capitalized upstream)
    #[serde(rename = "Bio")]
    pub bio: String,
    /// Free-text job title
    #[serde(rename = "jobTitle")]
    pub job_title: String,
    /// Nested profile record
    pub profile: Profile,
}

impl User {
    /// Username shortcut for the common sort/search path
    pub fn username(&self) -> &str {
        &self.profile.username
    }
}

/// Compare two usernames case-insensitively, ascending.
///
/// Lowercased forms are compared first; the raw strings break ties so the
/// ordering stays total and deterministic ("Alice" and "alice" always land
/// in the same relative order).
pub fn compare_usernames(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Sort records ascending by username under case-insensitive comparison.
///
/// The sort is stable and idempotent: sorting an already-sorted slice
/// yields the same order.
pub fn sort_users(users: &mut [User]) {
    users.sort_by(|a, b| compare_usernames(a.username(), b.username()));
}
