pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Only one UPF can be of type PCA (UPF {first} and UPF {second} are both PCA)")]
    DuplicatePca { first: usize, second: usize },

    #[error("Invalid {axis} coordinate for UPF {gateway}: {value:?}")]
    InvalidCoordinate {
        gateway: usize,
        axis: &'static str,
        value: String,
    },

    #[error("Topology JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
