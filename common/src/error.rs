use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors that end a scan before (or instead of) completion.
///
/// Per-port probe failures are never represented here: a port that cannot be
/// reached is simply not open.
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or malformed user input.
    #[error("{0}")]
    Input(String),

    /// The target is neither an IPv4 literal nor a resolvable hostname.
    #[error("Cannot resolve target: {target}")]
    Resolution { target: String },

    /// Reading prompts or writing the report failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Process exit status associated with this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Input(_) | Error::Io(_) => 1,
            Error::Resolution { .. } => 2,
        }
    }
}
