//! # gatehouse-auth-memory
//!
//! In-memory implementations of the `gatehouse-auth` storage traits.
//!
//! Suitable for tests, development servers, and single-node deployments
//! where auth data does not need to survive a restart. All stores are
//! `Send + Sync` and safe to share behind an `Arc` across concurrent
//! requests.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use gatehouse_auth::verifier::CredentialVerifier;
//! use gatehouse_auth_memory::{
//!     InMemoryAccessTokenStorage, InMemoryClientStorage, InMemoryUserStorage,
//! };
//!
//! let verifier = CredentialVerifier::new(
//!     Arc::new(InMemoryUserStorage::new()),
//!     Arc::new(InMemoryClientStorage::new()),
//!     Arc::new(InMemoryAccessTokenStorage::new()),
//! );
//! ```

pub mod client;
pub mod token;
pub mod user;

pub use client::InMemoryClientStorage;
pub use token::InMemoryAccessTokenStorage;
pub use user::InMemoryUserStorage;
