use thiserror::Error;

/// Errors that can occur while setting up a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to bind or inspect the mock upstream listener.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
