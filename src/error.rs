use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReflectError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP Error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Grammar Check Error: {0}")]
    Grammar(String),

    #[error("Embedding Error: {0}")]
    Embedding(String),

    #[error("Generation Error: {0}")]
    Generation(String),
}

pub type RlResult<T> = Result<T, ReflectError>;
