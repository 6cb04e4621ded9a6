//! Trait abstraction for the backend client to enable mocking in tests

use crate::api::error::ApiError;
use crate::state::LookupOption;
use async_trait::async_trait;

/// Trait for backend operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LookupApi: Send + Sync {
    /// Fetch the lookup entries that populate the dropdown
    async fn fetch_lookups(&self) -> Result<Vec<LookupOption>, ApiError>;

    /// Submit the current input text to the backend
    async fn submit(&self, payload: &str) -> Result<(), ApiError>;
}
