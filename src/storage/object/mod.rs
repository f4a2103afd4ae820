//! Object storage for mirrored images
//!
//! - `types` - the `ObjectStore` trait and upload payload
//! - `key` - object key derivation and content-type helpers
//! - `supabase` - Supabase Storage REST backend

pub mod key;
pub mod supabase;
mod types;

pub use key::{extension_for, object_key, slugify, sniff_content_type};
pub use supabase::SupabaseStorage;
pub use types::{ObjectStore, ObjectUpload};
