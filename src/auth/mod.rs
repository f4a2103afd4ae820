//! Token issuing for the development user endpoints
//!
//! There is no user store and no route checks these tokens; they exist so
//! client code can exercise its login flow against the gateway.

pub mod jwt;

pub use jwt::{JwtHandler, UserIdentity};
