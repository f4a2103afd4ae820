//! JWT token handling
//!
//! Signs and verifies HS256 tokens for the placeholder user served by the
//! `/api/user` endpoints.

mod handler;
pub mod types;
mod utils;


pub use types::{Claims, JwtHandler, TokenPair, TokenType, UserIdentity};
