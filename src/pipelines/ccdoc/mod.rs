//! CC license annotation pipeline over CommonCrawl WARC shards.
mod pipeline;
pub mod types;

pub use pipeline::CcDoc;
