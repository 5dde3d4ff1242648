#[derive(thiserror::Error, Debug)]
pub enum OutputError {
    #[error("output file '{0}' already exists and overwrite is not set")]
    AlreadyExistsError(String),
    #[error("failure writing '{0}': {1}")]
    WriteError(String, String),
}
