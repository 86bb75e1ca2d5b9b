use thiserror::Error;

#[derive(Error, Debug)]
pub enum RedsimError {
    #[error("Dataset not found: {0}")]
    DatasetNotFound(String),

    #[error("Malformed dataset: {0}")]
    MalformedDataset(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
