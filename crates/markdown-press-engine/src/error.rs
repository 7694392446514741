use crate::nodes::SpanKind;

/// Failures raised while turning markdown into an output tree.
///
/// Malformed inline syntax never ends up here: unbalanced delimiters and
/// incomplete links degrade to plain text instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("{kind} span must carry a non-empty url")]
    MissingUrl { kind: SpanKind },
    #[error("No level-1 heading found")]
    NoTitleFound,
    #[error("Structural contract violated: {0}")]
    Structure(String),
}
