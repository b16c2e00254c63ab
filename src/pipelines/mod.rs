//! Pipelines.
//!
//! The module provides a light [pipeline::Pipeline] trait that enables
//! easy and flexible pipeline creation.
pub mod ccdoc;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use ccdoc::CcDoc;
pub use pipeline::Pipeline;
