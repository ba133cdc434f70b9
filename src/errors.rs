use thiserror::Error;

#[derive(Debug, Error)]
pub enum HofError {
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        name: &'static str,
        reason: &'static str,
    },
    #[error(transparent)]
    Propagated(#[from] anyhow::Error),
    #[error(transparent)]
    LogDirective(#[from] tracing_subscriber::filter::ParseError),
    #[error(transparent)]
    InitLogging(#[from] tracing_subscriber::util::TryInitError),
}

impl HofError {
    pub(crate) fn invalid(name: &'static str, reason: &'static str) -> Self {
        Self::InvalidArgument { name, reason }
    }
}

pub type Result<T> = std::result::Result<T, HofError>;
