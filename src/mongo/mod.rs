pub mod aggregation;
pub mod client;
