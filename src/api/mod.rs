//! Registration API module for HTTP communication

mod client;
mod error;
mod traits;

pub use client::{ApiClient, RegistrationResponse, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use traits::RegistrationApi;

#[cfg(test)]
pub use traits::MockRegistrationApi;
