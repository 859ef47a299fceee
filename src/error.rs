use aws_sdk_dynamodb::error::BuildError;
use aws_sdk_dynamodb::operation::batch_write_item::BatchWriteItemError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use aws_smithy_runtime_api::client::result::SdkError;
use aws_smithy_runtime_api::http::Response;
use std::error::Error as StdError;
use std::fmt;

type DynamoScanError = SdkError<ScanError, Response>;
type DynamoBatchWriteItemError = SdkError<BatchWriteItemError, Response>;

/// Table transfer error
///
/// Store-call failures are fatal to the whole transfer and carry the SDK
/// error unmodified; there is no partial-success shape. A caller receiving
/// any of these must treat the completion state of the copy as unknown.
#[derive(Debug)]
pub enum Error {
    /// Write request construction error
    BuildError(BuildError),
    /// DynamoDB Scan operation error
    DynamoScanError(DynamoScanError),
    /// DynamoDB BatchWriteItem operation error
    DynamoBatchWriteItemError(DynamoBatchWriteItemError),
    /// The configured retry cap was exhausted while the store still reported
    /// unprocessed write requests
    UnprocessedItemsRemain {
        /// Destination table the requests were aimed at
        table: String,
        /// Number of write requests still unprocessed
        remaining: usize,
    },
}

impl Error {
    /// Check if the error came from the read side of the transfer
    ///
    /// Read failures abort the scan before any write happens.
    pub fn is_read_error(&self) -> bool {
        matches!(self, Error::DynamoScanError(_))
    }

    /// Check if the error came from the write side of the transfer
    ///
    /// Write failures abort the remaining chunks; items already submitted
    /// stay written.
    pub fn is_write_error(&self) -> bool {
        matches!(
            self,
            Error::DynamoBatchWriteItemError(_) | Error::UnprocessedItemsRemain { .. }
        )
    }
}

macro_rules! impl_from_error {
    ($name:ident) => {
        impl From<$name> for Error {
            fn from(e: $name) -> Self {
                Error::$name(e)
            }
        }
    };
}

impl_from_error!(BuildError);
impl_from_error!(DynamoScanError);
impl_from_error!(DynamoBatchWriteItemError);

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BuildError(e) => write!(f, "DynamoDB request builder error: {}", e),
            Error::DynamoScanError(e) => {
                write!(f, "DynamoDB Scan operation failed: {}", e)
            }
            Error::DynamoBatchWriteItemError(e) => {
                write!(f, "DynamoDB BatchWriteItem operation failed: {}", e)
            }
            Error::UnprocessedItemsRemain { table, remaining } => {
                write!(
                    f,
                    "retry cap exhausted with {} unprocessed write request(s) for table '{}'",
                    remaining, table
                )
            }
        }
    }
}

impl StdError for Error {}
