//! Trait abstraction for the registration API to enable mocking in tests

use crate::state::RegistrationRequest;
use async_trait::async_trait;

use super::client::RegistrationResponse;
use super::error::ApiError;

/// Remote account registration
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationApi: Send + Sync {
    /// Submit a registration.
    ///
    /// Resolves to `Ok` only for HTTP 200 or 201; every other outcome is
    /// an [`ApiError`] variant.
    async fn register(
        &self,
        request: &RegistrationRequest,
    ) -> Result<RegistrationResponse, ApiError>;
}
