use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TabulateError {
    /// The space statistics of the text do not support the requested
    /// number of columns at any end-of-column threshold. The table is
    /// left intact; retrying with a smaller minimum is valid.
    #[error("could not identify {requested} columns (best split found {found})")]
    InsufficientColumns { requested: usize, found: usize },
}

// Convenience type alias
pub type TabulateResult<T> = Result<T, TabulateError>;
