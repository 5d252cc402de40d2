//! Domain types for authentication.

pub mod access_token;
pub mod client;
pub mod principal;
pub mod user;

pub use access_token::AccessToken;
pub use client::Client;
pub use principal::Principal;
pub use user::{User, UserBuilder};
