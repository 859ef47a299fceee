use tracing::info;

use crate::Error;
use crate::store::{ContinuationKey, Item, TableStore};

/// Read every item of `table`, following continuation keys to exhaustion
///
/// Pages are fetched strictly in continuation order and concatenated as they
/// arrive; item order within a page is store-defined. Any read error aborts
/// the scan and propagates unmodified, with no partial result.
pub(crate) async fn scan_table<S: TableStore>(store: &S, table: &str) -> Result<Vec<Item>, Error> {
    let mut items: Vec<Item> = Vec::new();
    let mut start_key: Option<ContinuationKey> = None;

    loop {
        let page = store.read_page(table, start_key.take()).await?;
        items.extend(page.items);

        match page.next_start_key {
            Some(key) => {
                info!(
                    table,
                    "scan returned a paginated result, continuing from the last evaluated key"
                );
                start_key = Some(key);
            }
            None => break,
        }
    }

    Ok(items)
}
