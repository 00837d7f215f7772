use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("unknown property ownership status: {value}")]
    UnknownOwnership {
        value: String,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
