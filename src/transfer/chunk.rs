use aws_sdk_dynamodb::types::WriteRequest;

/// Per-call request limit DynamoDB imposes on `BatchWriteItem`
pub(crate) const MAX_BATCH_WRITE_SIZE: usize = 25;

/// Partition `requests` in order into consecutive groups of `max_size`
///
/// Only the final group may be smaller. Empty input yields no groups, and
/// concatenating the output reproduces the input exactly.
pub(crate) fn chunk_requests(
    requests: Vec<WriteRequest>,
    max_size: usize,
) -> Vec<Vec<WriteRequest>> {
    debug_assert!(max_size > 0, "chunk size must be positive");

    requests
        .chunks(max_size)
        .map(|chunk| chunk.to_vec())
        .collect()
}
