use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::{AttributeValue, WriteRequest};
use std::collections::HashMap;
use std::future::Future;

use crate::Error;

/// An opaque table item: attribute name to attribute value
///
/// Sourced verbatim from the store and copied unchanged from the read path to
/// the write path.
pub type Item = HashMap<String, AttributeValue>;

/// Opaque continuation marker returned by a paginated read
///
/// Must be echoed back on the next read to continue where the previous page
/// left off.
pub type ContinuationKey = HashMap<String, AttributeValue>;

/// Result of one read call against a table
#[derive(Clone, Debug, Default)]
pub struct ScanPage {
    /// Items of this page, in store-defined order
    pub items: Vec<Item>,
    /// Present when more pages exist; absent at end of table
    pub next_start_key: Option<ContinuationKey>,
}

/// Result of one batch write call
#[derive(Clone, Debug, Default)]
pub struct BatchOutcome {
    /// Write requests the store did not persist, keyed by table name.
    /// An empty map means the batch fully succeeded.
    pub unprocessed: HashMap<String, Vec<WriteRequest>>,
}

/// The two store operations the transfer engine depends on
///
/// [`aws_sdk_dynamodb::Client`] implements this against the live service;
/// tests drive the engine with a recording implementation instead.
pub trait TableStore {
    /// Read one page of items from `table`, resuming after `start_key`
    fn read_page(
        &self,
        table: &str,
        start_key: Option<ContinuationKey>,
    ) -> impl Future<Output = Result<ScanPage, Error>>;

    /// Submit one batch of write requests against `table`
    fn write_batch(
        &self,
        table: &str,
        requests: Vec<WriteRequest>,
    ) -> impl Future<Output = Result<BatchOutcome, Error>>;
}

impl TableStore for Client {
    fn read_page(
        &self,
        table: &str,
        start_key: Option<ContinuationKey>,
    ) -> impl Future<Output = Result<ScanPage, Error>> {
        async move {
            let result = self
                .scan()
                .table_name(table)
                .set_exclusive_start_key(start_key)
                .send()
                .await?;

            Ok(ScanPage {
                items: result.items.unwrap_or_default(),
                next_start_key: result.last_evaluated_key,
            })
        }
    }

    fn write_batch(
        &self,
        table: &str,
        requests: Vec<WriteRequest>,
    ) -> impl Future<Output = Result<BatchOutcome, Error>> {
        async move {
            let result = self
                .batch_write_item()
                .request_items(table, requests)
                .send()
                .await?;

            Ok(BatchOutcome {
                unprocessed: result.unprocessed_items.unwrap_or_default(),
            })
        }
    }
}
