use thiserror::Error;

/// Errors that abort a pipeline run before any place search happens.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    /// The query named no location the parser recognises.
    #[error("could not find any locations in the query")]
    NoLocations,

    /// A named location could not be geocoded.
    #[error("could not find location: {name}")]
    LocationNotFound { name: String },
}
