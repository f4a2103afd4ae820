//! Fake provider and object store

use async_trait::async_trait;
use imagegen_gateway::core::models::openai::{ImageGenerationRequest, ImageGenerationResponse};
use imagegen_gateway::core::providers::{ImageProvider, ProviderError};
use imagegen_gateway::storage::{ObjectStore, ObjectUpload};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Provider answering with a fixed result, optionally after a delay
#[derive(Debug)]
pub struct FakeProvider {
    delay: Duration,
    result: Result<ImageGenerationResponse, ProviderError>,
    calls: AtomicUsize,
    last_request: Mutex<Option<ImageGenerationRequest>>,
}

impl FakeProvider {
    pub fn ok(response: ImageGenerationResponse) -> Self {
        Self::with_result(Ok(response))
    }

    pub fn err(error: ProviderError) -> Self {
        Self::with_result(Err(error))
    }

    fn with_result(result: Result<ImageGenerationResponse, ProviderError>) -> Self {
        Self {
            delay: Duration::ZERO,
            result,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Delay every answer by `delay`
    pub fn slow(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<ImageGenerationRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageProvider for FakeProvider {
    fn name(&self) -> &'static str {
        "fake"
    }

    async fn generate_image(
        &self,
        request: &ImageGenerationRequest,
    ) -> Result<ImageGenerationResponse, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());
        tokio::time::sleep(self.delay).await;
        self.result.clone()
    }
}

/// Object store keeping uploads in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    uploads: Mutex<Vec<ObjectUpload>>,
}

impl MemoryStore {
    pub fn uploaded_paths(&self) -> Vec<String> {
        self.uploads
            .lock()
            .unwrap()
            .iter()
            .map(|u| u.path.clone())
            .collect()
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    fn provider_name(&self) -> &'static str {
        "supabase"
    }

    async fn upload(&self, upload: ObjectUpload) -> imagegen_gateway::Result<()> {
        self.uploads.lock().unwrap().push(upload);
        Ok(())
    }

    async fn create_signed_url(
        &self,
        path: &str,
        expires_in: u64,
    ) -> imagegen_gateway::Result<String> {
        Ok(format!(
            "https://storage.test/object/sign/{}?expires={}",
            path, expires_in
        ))
    }
}
