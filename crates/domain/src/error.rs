#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("no connection")]
    NoConnection,
    #[error("{status} {text}")]
    Status { status: u16, text: String },
    #[error("deserialization failed: {0}")]
    Deserialization(String),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

impl ReadError {
    #[must_use]
    pub fn is_no_connection(&self) -> bool {
        matches!(self, ReadError::Storage(StorageError::NoConnection))
    }
}
