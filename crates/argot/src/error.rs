use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while assembling a command or matching an
/// input against it.
///
/// The variants fall into three groups:
/// - structural errors, raised while wiring options and arguments together
///   (`EmptyFlag`, `GreedyConflict`) — these indicate a programming mistake
///   and are never raised while parsing input;
/// - input data errors, raised while matching a concrete argument list;
/// - validation errors from an argument's injected validator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("flag name is empty after normalization")]
    EmptyFlag,

    #[error("'{owner}' already has a greedy argument; nothing after it could be reached")]
    GreedyConflict { owner: String },

    #[error("unrecognized flag: {flag}")]
    UnrecognizedFlag { flag: String },

    #[error("flag '{flag}' may not be given more than once")]
    DuplicateFlag { flag: String },

    #[error("unrecognized argument: {value}")]
    UnrecognizedArgument { value: String },

    #[error("option name is empty")]
    EmptyOption,

    #[error("expected an option, but the input is exhausted")]
    EndOfInput,

    #[error("expected an option, found argument: {value}")]
    UnexpectedArgument { value: String },

    #[error("invalid value '{value}' for [{arg}]: {message}")]
    Validation {
        arg: String,
        value: String,
        message: String,
    },
}

impl Error {
    /// Whether the error came from matching an input rather than from
    /// assembling the command. Data errors make a form-selection loop try
    /// the next candidate form; structural errors never should.
    pub fn is_data(&self) -> bool {
        !matches!(self, Self::EmptyFlag | Self::GreedyConflict { .. })
    }
}
