#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Unknown catalog category: {0}")]
    UnknownCategory(String),
}
