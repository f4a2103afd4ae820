//! Common test utilities for imagegen-gateway
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::{TestApp, fixtures, FakeProvider};
//!
//! #[actix_web::test]
//! async fn my_test() {
//!     let harness = TestApp::new(FakeProvider::ok(fixtures::url_response("https://img.test/a.png")));
//!     let app = actix_web::test::init_service(create_app(harness.state())).await;
//!     // ...
//! }
//! ```

pub mod fixtures;
pub mod providers;

// Re-export commonly used items
pub use app::TestApp;
pub use providers::{FakeProvider, MemoryStore};

/// Initialize the full application for a [`TestApp`]
#[macro_export]
macro_rules! init_app {
    ($harness:expr) => {
        actix_web::test::init_service(imagegen_gateway::server::create_app($harness.state())).await
    };
}
