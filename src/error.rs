use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpdaterError {
    #[error("unable to build http client")]
    ClientBuildError,
    #[error("unable to build proxy")]
    ProxyBuildError,
    #[error("invalid profile url for user {0:?}")]
    InvalidProfileUrl(String),
    #[error("unable to connect to {0}")]
    UnableToConnect(String),
    #[error("non-200 status code: {0}")]
    BadStatus(reqwest::StatusCode),
    #[error("unable to read response body")]
    UnableToGetText,
    #[error("invalid css selector {0:?}")]
    InvalidSelector(&'static str),
    #[error("unknown template placeholder {{{{{0}}}}}")]
    UnknownPlaceholder(String),
    #[error("unclosed template placeholder at byte {0}")]
    UnclosedPlaceholder(usize),
    #[error("unable to read template {path}: {source}")]
    TemplateRead {
        path: String,
        source: std::io::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
