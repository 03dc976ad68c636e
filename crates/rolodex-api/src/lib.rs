//! HTTP client for the rolodex directory endpoint.
//!
//! The directory is a single remote collection of user records. This crate
//! owns the wire model for those records, the decoding quirks of the
//! upstream contract, and a small reqwest-based client that performs the
//! one read the application needs.

pub mod client;
pub mod error;
pub mod user;

pub use client::DirectoryClient;
pub use error::{Error, Result};
pub use user::{compare_usernames, sort_users, Profile, User};
