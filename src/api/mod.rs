//! Registration endpoint client and submission flow

mod client;
mod submission;
mod traits;

pub use client::{RegistrationClient, DEFAULT_ENDPOINT};
pub use submission::submit;
pub use traits::RegistrationClientTrait;

#[cfg(test)]
pub use client::{SubmitError, SubmitResponse};
#[cfg(test)]
pub use traits::MockRegistrationClientTrait;
