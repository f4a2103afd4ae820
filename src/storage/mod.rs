//! Storage layer for the gateway
//!
//! Generated images can be mirrored into an object store so clients get a
//! stable signed URL instead of the provider's short-lived one.

pub mod object;

pub use object::{ObjectStore, ObjectUpload, SupabaseStorage};
