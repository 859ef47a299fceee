//! Test helpers for driving the transfer engine against a scripted store
//!
//! `MockStore` answers reads and writes from queued responses and records
//! every call it receives; `fixtures` holds builders for opaque items, pages,
//! and write requests.

// Shared across several test binaries; not every binary uses every helper.
#![allow(dead_code)]


pub use fixtures::*;

use std::collections::VecDeque;
use std::future::Future;
use std::sync::Mutex;

use dynamo_transfer::{
    BatchOutcome, ContinuationKey, Error, ScanPage, TableStore, WriteRequest,
};

/// One recorded read call: table name plus the start key it carried
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedScan {
    pub table: String,
    pub start_key: Option<ContinuationKey>,
}

/// One recorded write call: table name plus the submitted requests
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedWrite {
    pub table: String,
    pub requests: Vec<WriteRequest>,
}

/// Kind of store call, in global arrival order
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Op {
    Scan,
    Write,
}

/// Scripted store backing the engine in tests
///
/// Reads pop queued pages (an empty queue answers with an empty final page);
/// writes pop queued outcomes (an empty queue answers full success).
#[derive(Debug, Default)]
pub struct MockStore {
    pages: Mutex<VecDeque<Result<ScanPage, Error>>>,
    outcomes: Mutex<VecDeque<Result<BatchOutcome, Error>>>,
    scans: Mutex<Vec<RecordedScan>>,
    writes: Mutex<Vec<RecordedWrite>>,
    ops: Mutex<Vec<Op>>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next scan response
    pub fn push_page(&self, page: ScanPage) {
        self.pages.lock().unwrap().push_back(Ok(page));
    }

    /// Queue a scan failure
    pub fn push_read_error(&self, error: Error) {
        self.pages.lock().unwrap().push_back(Err(error));
    }

    /// Queue the next batch write outcome
    pub fn push_outcome(&self, outcome: BatchOutcome) {
        self.outcomes.lock().unwrap().push_back(Ok(outcome));
    }

    /// Queue a batch write failure
    pub fn push_write_error(&self, error: Error) {
        self.outcomes.lock().unwrap().push_back(Err(error));
    }

    pub fn recorded_scans(&self) -> Vec<RecordedScan> {
        self.scans.lock().unwrap().clone()
    }

    pub fn recorded_writes(&self) -> Vec<RecordedWrite> {
        self.writes.lock().unwrap().clone()
    }

    /// Every store call in arrival order, across both operations
    pub fn recorded_ops(&self) -> Vec<Op> {
        self.ops.lock().unwrap().clone()
    }
}

impl TableStore for MockStore {
    fn read_page(
        &self,
        table: &str,
        start_key: Option<ContinuationKey>,
    ) -> impl Future<Output = Result<ScanPage, Error>> {
        self.ops.lock().unwrap().push(Op::Scan);
        self.scans.lock().unwrap().push(RecordedScan {
            table: table.to_string(),
            start_key,
        });

        let next = self
            .pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(ScanPage::default()));

        async move { next }
    }

    fn write_batch(
        &self,
        table: &str,
        requests: Vec<WriteRequest>,
    ) -> impl Future<Output = Result<BatchOutcome, Error>> {
        self.ops.lock().unwrap().push(Op::Write);
        self.writes.lock().unwrap().push(RecordedWrite {
            table: table.to_string(),
            requests,
        });

        let next = self
            .outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(BatchOutcome::default()));

        async move { next }
    }
}
