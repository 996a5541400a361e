use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("No display available")]
    DisplayUnavailable,
    #[error("Display reported an invalid size: {width}x{height}")]
    InvalidScreenSize { width: u32, height: u32 },
    #[error("Failed to simulate event: {0}")]
    Simulate(String),
}
