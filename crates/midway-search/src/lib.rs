//! Location resolution, midpoint calculation, place ranking and the
//! end-to-end query pipeline.

pub mod engine;
pub mod error;
pub mod midpoint;
pub mod pipeline;
pub mod resolver;

pub use engine::{SearchEngine, SearchOutcome};
pub use error::PipelineError;
pub use pipeline::{Pipeline, ReportStatus, SearchReport};
