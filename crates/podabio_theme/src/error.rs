use thiserror::Error;

/// Errors reported by strict token parsing.
///
/// The render path never surfaces these: a group that fails to parse is
/// treated as absent for its layer. They exist so editors and tooling can
/// reject bad token JSON before it is stored.
#[derive(Debug, Error)]
pub enum TokenParseError {
    #[error("invalid token json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("token group must be a json object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("unsupported value at `{path}`: {found} (expected a string or number)")]
    UnsupportedValue { path: String, found: &'static str },
}
