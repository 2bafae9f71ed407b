use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid mode: {given}")]
    InvalidMode { given: String },

    #[error("Unknown zone: {name}")]
    InvalidZone { name: String },
}

pub type SimResult<T> = Result<T, SimError>;
