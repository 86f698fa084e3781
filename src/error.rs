use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to read key {key:?}")]
    Read { key: String },
    #[error("failed to write key {key:?}")]
    Write { key: String },
}

/// Contact form rejections. The display text is what the user sees under the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill all fields.")]
    MissingFields,
    #[error("Please enter a valid email.")]
    InvalidEmail,
}
