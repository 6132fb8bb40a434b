//! Client side of the external property search service.

pub mod client;
pub mod types;

pub use client::PropertyClient;
pub use types::{Card, SearchRequest, SearchResponse};
