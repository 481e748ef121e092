use thiserror::Error;

/// Failure to locate or read a resource.
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("no resource matches `{0}`")]
    NotFound(String),

    #[error("`{suffix}` matches more than one resource: {}", .candidates.join(", "))]
    Ambiguous {
        suffix: String,
        candidates: Vec<String>,
    },

    #[error("resource `{0}` is not valid UTF-8")]
    NotUtf8(String),

    #[error("failed to read resource `{name}`")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
}
