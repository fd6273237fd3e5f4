use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("invalid parameter {name}: {value} (must be >= 1)")]
    InvalidParameter { name: &'static str, value: u32 },

    #[error("NUM_VARS and DEPTH must be supplied together")]
    IncompleteParameters,

    #[error("failed to write fixture: {0}")]
    Io(#[from] std::io::Error),
}

pub type GeneratorResult<T> = Result<T, GeneratorError>;
