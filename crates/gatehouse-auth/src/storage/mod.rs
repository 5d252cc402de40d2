//! Storage traits for authentication data.
//!
//! This module defines storage interfaces for:
//!
//! - User accounts
//! - OAuth client registrations
//! - Access tokens
//!
//! # Implementations
//!
//! Storage implementations are provided in separate crates:
//!
//! - `gatehouse-auth-memory` - in-memory storage backend

pub mod access_token;
pub mod client;
pub mod user;

pub use access_token::AccessTokenStorage;
pub use client::ClientStorage;
pub use user::UserStorage;
