use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage I/O failed for key {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
