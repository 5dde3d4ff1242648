#[derive(thiserror::Error, Debug)]
pub enum EventError {
    #[error("failure reading '{0}': {1}")]
    ReadError(String, String),
    #[error("failure decoding event row {0}: {1}")]
    MalformedRow(usize, String),
}
