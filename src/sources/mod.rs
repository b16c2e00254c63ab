//! Data sources (CommonCrawl shards).
pub mod commoncrawl;
