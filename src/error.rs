use thiserror::Error;

/// Errors surfaced before sampling starts. Nothing fails mid-run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LdaError {
    #[error("number of topics must be positive")]
    InvalidTopicCount,

    #[error("invalid hyperparameter: {0}")]
    InvalidParameter(String),

    #[error("number of sweeps must be positive")]
    InvalidSweepCount,

    #[error("number of reported terms per topic must be positive")]
    InvalidTopN,

    #[error("top-{top_n} terms requested but the vocabulary only holds {vocabulary}")]
    TopNExceedsVocabulary { top_n: usize, vocabulary: usize },

    #[error("vocabulary is empty after filtering, the corpus carries no terms to model")]
    EmptyVocabulary,

    #[error("term {0:?} is not in the vocabulary")]
    UnknownTerm(String),
}

pub type Result<T> = std::result::Result<T, LdaError>;
