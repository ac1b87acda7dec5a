use thiserror::Error;

/// Failures the command surface knows how to report.
///
/// Unrecognized status codes are deliberately not represented here: the
/// formatter renders them verbatim so new upstream states keep working.
#[derive(Debug, Error)]
pub enum ScoresError {
    #[error("{0} is not a valid competition")]
    UnknownCompetition(String),

    #[error("no teams found matching query")]
    EmptyResult,

    #[error("upstream request failed: {0}")]
    Upstream(String),

    #[error("malformed response: {0}")]
    Malformed(String),
}
