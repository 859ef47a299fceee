use aws_config::{BehaviorVersion, Region, defaults};
use aws_sdk_dynamodb::Client;
use aws_types::sdk_config::{RetryConfig, TimeoutConfig};
use std::time::Duration;

use crate::transfer::TransferConfig;

/// Build an invocation-scoped DynamoDB client
///
/// Every `execute` call gets its own client so concurrent transfers from a
/// host process never share mutable state. Configures:
/// - Adaptive retry mode with 3 max attempts
/// - Exponential backoff starting at 1 second
/// - Connect timeout: 3 seconds
/// - Read timeout: 20 seconds
/// - Operation timeout: 60 seconds
/// - LocalStack support via AWS_PROFILE=localstack
pub(crate) async fn connect(config: &TransferConfig) -> Client {
    let timeout_config = TimeoutConfig::builder()
        .connect_timeout(Duration::from_secs(3))
        .read_timeout(Duration::from_secs(20))
        .operation_timeout(Duration::from_secs(60))
        .build();

    let mut loader = defaults(BehaviorVersion::latest())
        .retry_config(
            RetryConfig::adaptive()
                .with_max_attempts(3)
                .with_initial_backoff(Duration::from_secs(1)),
        )
        .timeout_config(timeout_config);

    if let Some(region) = config.region.clone() {
        loader = loader.region(Region::new(region));
    }

    // An explicit endpoint wins over the LocalStack profile shortcut
    if let Some(endpoint) = &config.endpoint_url {
        loader = loader.endpoint_url(endpoint);
    } else if std::env::var("AWS_PROFILE").unwrap_or_default() == "localstack" {
        loader = loader.endpoint_url("http://127.0.0.1:4566");
    }

    Client::new(&loader.load().await)
}
