//! Module for the user profile API.
//!
//! This module defines the public interface and structure for creating,
//! reading, updating and deleting user profiles through HTTP endpoints.

pub mod handlers;
pub mod routes;
