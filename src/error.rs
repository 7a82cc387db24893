#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("key not found")]
    NotFound,

    #[error("container is empty")]
    EmptyContainer,

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("precondition violated: {0}")]
    PreconditionViolation(String),

    #[error("corpus contains no documents")]
    EmptyCorpus,

    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, Error>;
