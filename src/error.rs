use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContextError {
    #[error("Failure carries no stack frames")]
    NoFrames,
    #[error("Invalid line number {line}: lines start at 1")]
    InvalidLine { line: usize },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
