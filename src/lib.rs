//! Event frequency report for the `mixpanel_stage` MongoDB collection.
//!
//! Runs a single group-and-count aggregation and prints a bare CSV report
//! to stdout: a fixed banner line, an `event,row_count` header, then one
//! `<event>,<count>` line per distinct event value. Group order across
//! keys is server-defined; no sort stage is issued.

pub mod mongo;
pub mod report;
