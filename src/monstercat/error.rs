use thiserror::Error;

pub type Result<T> = std::result::Result<T, AccountError>;

#[derive(Error, Debug)]
pub enum AccountError {
    #[error("invalid account payload: {0}")]
    InvalidPayload(#[source] serde_json::Error),

    #[error("Error while encoding account: {0}")]
    Encode(#[source] serde_json::Error),
}

