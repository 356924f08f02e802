use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

/// Failures crossing the feed and engine boundaries.
#[derive(Debug, Error)]
pub enum ChartError {
    /// Transport or auth failure reaching the analytics engine. Fatal to
    /// the current open call; retry policy belongs to the caller.
    #[error("engine connection failed: {0}")]
    Connection(String),

    #[error("no object with id {0:?}")]
    ObjectNotFound(String),

    /// The cube layout carries no dimensions or no measures.
    #[error("hypercube has no dimensions or measures")]
    EmptyData,

    /// A wire row that cannot fill the five cell roles.
    #[error("malformed row: {0}")]
    MalformedRow(String),
}
