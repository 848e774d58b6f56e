use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid listen port '{0}'")]
    InvalidPort(String),

    #[error("invalid allowed origin '{0}'")]
    InvalidOrigin(String),
}
