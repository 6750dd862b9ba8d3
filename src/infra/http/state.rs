use std::sync::Arc;

use crate::application::generator::Generator;

/// Axum's own default body limit.
const DEFAULT_MAX_REQUEST_BYTES: usize = 2 * 1024 * 1024;

#[derive(Clone)]
pub struct HttpState {
    pub generator: Generator,
    /// Banner returned by `GET /`.
    pub service_name: Arc<str>,
    pub max_request_bytes: usize,
}

impl HttpState {
    pub fn new(generator: Generator, service_name: impl Into<Arc<str>>) -> Self {
        Self {
            generator,
            service_name: service_name.into(),
            max_request_bytes: DEFAULT_MAX_REQUEST_BYTES,
        }
    }

    pub fn with_max_request_bytes(mut self, limit: usize) -> Self {
        self.max_request_bytes = limit;
        self
    }
}
