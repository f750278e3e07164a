mod retry;

use crate::ManagementClient;

use cm_config::{EnvironmentCredentials, RetryConfig};

use std::time::Duration;

pub(crate) const ENVIRONMENT_ID: &str = "env-1";
pub(crate) const API_KEY: &str = "secret-key";

pub(crate) fn fast_retry(max_attempts: u32) -> RetryConfig {
    RetryConfig {
        max_attempts,
        initial_delay_ms: 1,
        max_delay_secs: 1,
        backoff_multiplier: 2.0,
        jitter: false,
    }
}

pub(crate) fn client_for(base_url: &str, retry: RetryConfig) -> ManagementClient {
    let credentials = EnvironmentCredentials {
        environment_id: ENVIRONMENT_ID.to_string(),
        api_key: API_KEY.to_string(),
    };
    ManagementClient::new(base_url, &credentials, Duration::from_secs(5), retry).unwrap()
}
