use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnigmaError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown wheel '{0}' (expected I..V)")]
    UnknownWheel(String),

    #[error("Unknown reflector '{0}' (expected B or C)")]
    UnknownReflector(String),

    #[error("Malformed plug pair '{0}' (expected two distinct letters)")]
    MalformedPair(String),

    #[error("Letter '{0}' appears in more than one plug pair")]
    ConflictingPair(char),

    #[error("Ring setting {0} out of range 0..26")]
    RingOutOfRange(u8),

    #[error("Rotor position {0} out of range 0..26")]
    PositionOutOfRange(u8),

    #[error("Unsupported n-gram size {0} (expected 2, 3, or 4)")]
    UnsupportedNgram(usize),

    #[error("N-gram table error: {0}")]
    Table(String),

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type CrackResult<T> = Result<T, EnigmaError>;
