pub mod cli;
pub mod containment;
pub mod error;
pub mod identifiers;
pub mod io;
pub mod license;
pub mod pipelines;
pub mod sources;
pub mod transformers;
