/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when interpreting map or record data.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The text does not name one of the eight locations.
    #[error("unknown location: \"{0}\"")]
    UnknownLocation(String),

    /// A die face outside 1-8 was used to pick a location.
    #[error("no location for roll {0}")]
    InvalidLocationRoll(u32),

    /// The text does not name a rumor category.
    #[error("unknown category: \"{0}\"")]
    UnknownCategory(String),
}
