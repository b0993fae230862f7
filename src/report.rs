//! Row model and report writer for the event-count aggregation output.

use std::fmt;
use std::io::Write;

use anyhow::{Context, Result};
use futures::{Stream, StreamExt};
use mongodb::bson::{self, Document};
use serde::Deserialize;

/// Fixed first line; downstream consumers scan for it to find the data.
pub const BANNER: &str = "my results start from here";
pub const HEADER: &str = "event,row_count";

/// One group result: a distinct event name and the number of staged
/// documents carrying it. Mirrors the aggregation output shape, where the
/// grouping key is a subdocument under `_id`.
#[derive(Debug, PartialEq, Eq, Deserialize)]
pub struct EventCount {
    #[serde(rename = "_id")]
    key: GroupKey,
    pub count: i64,
}

#[derive(Debug, PartialEq, Eq, Deserialize)]
struct GroupKey {
    event: String,
}

impl EventCount {
    pub fn from_document(doc: Document) -> Result<Self> {
        bson::from_document(doc).context("Malformed group document from aggregation")
    }

    pub fn event(&self) -> &str {
        &self.key.event
    }
}

impl fmt::Display for EventCount {
    /// Bare CSV, no quoting: an event name containing a comma produces a
    /// line with an extra comma.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.key.event, self.count)
    }
}

/// Drain the aggregation result into `out`: banner, header, then one line
/// per group in whatever order the stream yields them. The first cursor or
/// decode error aborts the report; lines already written stay written.
/// Returns the number of data lines on success.
pub async fn write_report<S, W>(mut rows: S, out: &mut W) -> Result<u64>
where
    S: Stream<Item = mongodb::error::Result<Document>> + Unpin,
    W: Write,
{
    writeln!(out, "{}", BANNER)?;
    writeln!(out, "{}", HEADER)?;

    let mut written = 0u64;
    while let Some(doc) = rows.next().await {
        let row = EventCount::from_document(doc.context("Aggregation cursor failed")?)?;
        writeln!(out, "{}", row)?;
        written += 1;
    }

    Ok(written)
}
