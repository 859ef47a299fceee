use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Source/destination selection and connection parameters for one transfer
///
/// Field names (de)serialize in the camelCase shape consumed by wrapping
/// tools: `sourceTable`, `destinationTable`, `region`, `endpointUrl`.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferConfig {
    /// Table the scan reads from
    pub source_table: String,
    /// Table the batch writes go to
    pub destination_table: String,
    /// AWS region override; absent falls back to the ambient provider chain
    #[serde(default)]
    pub region: Option<String>,
    /// Custom endpoint (LocalStack, DynamoDB Local)
    #[serde(default)]
    pub endpoint_url: Option<String>,
}

/// Tuning knobs whose defaults leave the observable behavior unchanged
#[derive(Clone, Debug, Default)]
pub struct TransferOptions {
    /// Retry behavior for write requests the store reports as unprocessed
    pub retry: RetryPolicy,
}

/// Retry behavior for unprocessed write requests
///
/// The default resubmits immediately and without bound. A store that
/// perpetually rejects the same requests therefore loops forever; set
/// `max_retries` to fail with [`crate::Error::UnprocessedItemsRemain`]
/// instead, and a nonzero `initial_delay` to back off exponentially (capped
/// at `max_delay`) between resubmission rounds.
#[derive(Clone, Debug)]
pub struct RetryPolicy {
    /// Maximum resubmission rounds per chunk; `None` retries until the store
    /// stops reporting unprocessed requests
    pub max_retries: Option<usize>,
    /// Delay before the first resubmission; zero resubmits immediately
    pub initial_delay: Duration,
    /// Cap on the exponentially growing delay between resubmissions
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: None,
            initial_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
        }
    }
}

/// Final output of a transfer
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TransferOutput {
    /// Total count of write requests submitted across all batch calls.
    ///
    /// Counted per attempt: a request resubmitted after an unprocessed
    /// report contributes once per submission.
    #[serde(rename = "ProcessedItems")]
    pub processed_items: usize,
}
