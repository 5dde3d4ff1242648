#[derive(thiserror::Error, Debug)]
pub enum CostError {
    #[error("failure reading '{0}': {1}")]
    TableReadError(String, String),
    #[error("failure building cost configuration: {0}")]
    ConfigurationError(String),
}
