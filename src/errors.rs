use thiserror::Error;

/// Errors raised while building trees or extracting arguments.
///
/// Both variants are scoped to a single sentence: a batch driver logs
/// them and moves on to the next sentence.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// An inner node's data string could not be split into a feature/label pair.
    #[error("malformed node '{data}' at position {position}")]
    MalformedNode { data: String, position: usize },

    /// More than one subject root survived filtering. Recoverable: the
    /// extractor resolves it by keeping the candidate closest to the relation.
    #[error("{count} subject roots survived filtering, expected one")]
    AmbiguousSubject { count: usize },
}
