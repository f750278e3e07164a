//! Management API collaborator: the `ManagementApi` seam used by the sync
//! layer and its reqwest implementation.

pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod management_api;
pub(crate) mod retry;

#[cfg(test)]
mod tests;

pub use client::ManagementClient;
pub use error::{ClientError, ClientResult};
pub use management_api::ManagementApi;
pub use retry::{MAX_RETRY_AFTER, RetryDecision, Retryable, parse_retry_after, with_retry};
