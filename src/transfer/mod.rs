mod batch;
mod chunk;
mod scan;
mod types;

pub use types::{RetryPolicy, TransferConfig, TransferOptions, TransferOutput};

use aws_sdk_dynamodb::types::{PutRequest, WriteRequest};

use crate::Error;
use crate::client;
use crate::store::{Item, TableStore};

/// Copy every item from the configured source table into the destination
///
/// Builds an invocation-scoped client from the connection parameters in
/// `config` and runs the transfer with default options: unbounded, immediate
/// resubmission of unprocessed write requests.
pub async fn execute(config: &TransferConfig) -> Result<TransferOutput, Error> {
    execute_with_options(config, &TransferOptions::default()).await
}

/// Copy every item from the configured source table into the destination,
/// with explicit tuning options
pub async fn execute_with_options(
    config: &TransferConfig,
    options: &TransferOptions,
) -> Result<TransferOutput, Error> {
    let store = client::connect(config).await;

    copy_table(
        &store,
        &config.source_table,
        &config.destination_table,
        options,
    )
    .await
}

/// Run the transfer against an already-constructed store
///
/// Scans `source_table` to exhaustion, wraps every scanned item unmodified in
/// a put-operation write request, and batch-writes the full list to
/// `destination_table`. The scan completes before the first write is issued;
/// there is no overlap between the read and write phases.
///
/// Any store-call failure aborts the transfer and surfaces unmodified. There
/// is no partial-success result: on error the completion state of the copy is
/// unknown to the caller.
pub async fn copy_table<S: TableStore>(
    store: &S,
    source_table: &str,
    destination_table: &str,
    options: &TransferOptions,
) -> Result<TransferOutput, Error> {
    let items = scan::scan_table(store, source_table).await?;
    let requests = put_requests(items)?;
    let processed_items =
        batch::write_all(store, destination_table, requests, &options.retry).await?;

    Ok(TransferOutput { processed_items })
}

/// Wrap each item in a put-operation write request, preserving order
fn put_requests(items: Vec<Item>) -> Result<Vec<WriteRequest>, Error> {
    let mut requests = Vec::with_capacity(items.len());

    for item in items {
        let put_request = PutRequest::builder().set_item(Some(item)).build()?;

        requests.push(
            WriteRequest::builder()
                .set_put_request(Some(put_request))
                .build(),
        );
    }

    Ok(requests)
}
