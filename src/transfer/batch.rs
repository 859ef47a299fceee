use aws_sdk_dynamodb::types::WriteRequest;
use std::time::Duration;
use tokio::time::sleep;
use tracing::info;

use crate::Error;
use crate::store::TableStore;
use crate::transfer::chunk::{MAX_BATCH_WRITE_SIZE, chunk_requests};
use crate::transfer::types::RetryPolicy;

/// Write every request to `table` and return the total submitted count
///
/// Chunks are submitted strictly in order, one call at a time. After each
/// call the requests the store reports unprocessed for `table` are
/// resubmitted until none remain; only then does the next chunk start. The
/// returned count covers every submission, so a request resubmitted after an
/// unprocessed report contributes once per attempt.
///
/// A write-call error aborts the remaining chunks and any pending
/// resubmissions. Resubmission itself is immediate and unbounded under the
/// default [`RetryPolicy`].
pub(crate) async fn write_all<S: TableStore>(
    store: &S,
    table: &str,
    requests: Vec<WriteRequest>,
    retry: &RetryPolicy,
) -> Result<usize, Error> {
    let mut processed = 0usize;

    for chunk in chunk_requests(requests, MAX_BATCH_WRITE_SIZE) {
        let mut pending = chunk;
        let mut round = 0usize;

        while !pending.is_empty() {
            if round > 0 {
                if retry.max_retries.is_some_and(|max| round > max) {
                    return Err(Error::UnprocessedItemsRemain {
                        table: table.to_string(),
                        remaining: pending.len(),
                    });
                }

                let delay = retry_delay(round - 1, retry.initial_delay, retry.max_delay);
                if !delay.is_zero() {
                    sleep(delay).await;
                }
            }

            // Unprocessed requests are bounded by the prior submission size,
            // but re-chunk in case a store ever hands back more than one
            // batch worth.
            let mut rejected: Vec<WriteRequest> = Vec::new();

            for batch in chunk_requests(pending, MAX_BATCH_WRITE_SIZE) {
                processed += batch.len();

                let mut outcome = store.write_batch(table, batch).await?;
                if let Some(reported) = outcome.unprocessed.remove(table) {
                    rejected.extend(reported);
                }
            }

            if !rejected.is_empty() {
                info!(
                    table,
                    count = rejected.len(),
                    "unprocessed write request(s) reported, retrying"
                );
            }

            pending = rejected;
            round += 1;
        }
    }

    Ok(processed)
}

/// Delay before resubmission `attempt` (0-based): `initial` doubled per
/// attempt, capped at `max`
pub(crate) fn retry_delay(attempt: usize, initial: Duration, max: Duration) -> Duration {
    let factor = 2u64.saturating_pow(attempt.min(u32::MAX as usize) as u32);
    let delay_ms = (initial.as_millis() as u64)
        .saturating_mul(factor)
        .min(max.as_millis() as u64);

    Duration::from_millis(delay_ms)
}
