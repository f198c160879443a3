use thiserror::Error;

/// Schema validation failures. All of them result in 400 Bad Request.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A required property was missing or set to `null`.
    #[error("Property '{0}' is required")]
    Required(&'static str),

    /// A link-typed property does not hold an http(s) URL.
    #[error("Field {0} only allows a Link")]
    InvalidLink(&'static str),

    /// The JSON body could not be parsed into the resource schema.
    #[error("{0}")]
    Body(String),

    /// The query string could not be parsed.
    #[error("{0}")]
    Query(String),

    /// Flight search was given only one of its two airports.
    #[error("Flight search requires both 'from' and 'to' airport ids")]
    IncompleteFlightSearch,
}
