use thiserror::Error;

pub type Result<T> = std::result::Result<T, DpskError>;

#[derive(Debug, Error)]
pub enum DpskError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("sample out of range at tick {tick}: {value} does not fit in {width} bits")]
    SampleRange { tick: usize, value: i32, width: u8 },

    #[error("stimulus error: {0}")]
    Stimulus(String),

    #[error("profile format error: {0}")]
    ProfileFormat(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
