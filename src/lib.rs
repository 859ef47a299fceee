//! # DynamoDB Table Transfer
//!
//! Copies the full contents of one DynamoDB table into another table of the
//! same store:
//! - Paginated full-table scan of the source (continuation keys followed to
//!   exhaustion before any write happens)
//! - Chunked `BatchWriteItem` calls against the destination, 25 requests per
//!   call, submitted strictly in order
//! - Unprocessed items reported by the store are resubmitted until none
//!   remain, with an optional retry cap and backoff
//!
//! Items are treated as opaque attribute maps and copied verbatim; the engine
//! never inspects or transforms their contents.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dynamo_transfer::{execute, TransferConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), dynamo_transfer::Error> {
//!     let config = TransferConfig {
//!         source_table: "orders".to_string(),
//!         destination_table: "orders-backup".to_string(),
//!         region: Some("eu-west-1".to_string()),
//!         endpoint_url: None,
//!     };
//!
//!     let result = execute(&config).await?;
//!     println!("processed {} write requests", result.processed_items);
//!     Ok(())
//! }
//! ```
//!
//! The engine itself only depends on the [`store::TableStore`] seam, so any
//! wrapping tool (or test) can drive [`copy_table`] with its own store
//! implementation instead of a live client.
#![deny(
    warnings,
    bad_style,
    dead_code,
    improper_ctypes,
    non_shorthand_field_patterns,
    no_mangle_generic_items,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    unconditional_recursion,
    unused,
    unused_allocation,
    unused_comparisons,
    unused_parens,
    while_true,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
    unused_results,
    deprecated,
    unknown_lints,
    unreachable_code,
    unused_mut
)]

mod client;
mod error;
pub use error::Error;

/// Store access seam: the two operations the engine needs
pub mod store;

/// Transfer engine: scanner, chunker, batch writer
pub mod transfer;

// Re-export main types for convenience
pub use store::{BatchOutcome, ContinuationKey, Item, ScanPage, TableStore};
pub use transfer::{
    RetryPolicy, TransferConfig, TransferOptions, TransferOutput, copy_table, execute,
    execute_with_options,
};

// Re-export the SDK types that appear in `TableStore` signatures so store
// implementations don't need a direct aws-sdk-dynamodb dependency
pub use aws_sdk_dynamodb::Client as DynamoDbClient;
pub use aws_sdk_dynamodb::types::{AttributeValue, PutRequest, WriteRequest};
