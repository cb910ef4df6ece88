use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed temperature at byte {offset}: unexpected byte 0x{byte:02x}")]
    MalformedNumber { offset: usize, byte: u8 },

    #[error("Temperature token at byte {offset} exceeds the maximum digit count")]
    NumberTooLong { offset: usize },

    #[error("Empty temperature token at byte {offset}")]
    EmptyNumber { offset: usize },

    #[error("Record at byte {offset} has no ';' separator")]
    MissingSeparator { offset: usize },

    #[error("Chunk boundary at byte {offset} has no line terminator before end of input")]
    UnterminatedChunk { offset: usize },

    #[error("Aggregate table is full ({capacity} slots); raise the table capacity")]
    TableFull { capacity: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration load error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Failed to build worker thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Async task error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}
