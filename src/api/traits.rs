//! Trait abstraction for the registration client to enable mocking in tests

use super::client::{SubmitError, SubmitResponse};
use crate::state::FormData;
use async_trait::async_trait;

/// Trait for registration endpoint operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationClientTrait: Send + Sync {
    /// POST the form as JSON and decode the success body
    async fn submit_form(&self, form: &FormData) -> Result<SubmitResponse, SubmitError>;
}
