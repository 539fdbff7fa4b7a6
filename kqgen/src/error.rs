use thiserror::Error;

/// The errors that can be returned from generating, saving or loading a workload.
#[derive(Error, Debug)]
pub enum WorkloadError {
    #[error("Value range {low}..={high} must hold at least two distinct values")]
    DegenerateRange { low: i32, high: i32 },
    #[error("Could not parse workload: {0}")]
    Parse(#[from] ParseError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// The errors that can be returned from reading a workload token stream.
#[derive(Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("Unknown command `{0}`")]
    UnknownCommand(String),
    #[error("Wrong input for command `{command}`: {token:?}")]
    WrongInput {
        command: char,
        // None when the stream ended before the operand.
        token: Option<String>,
    },
}
