use miette::Diagnostic;
use thiserror::Error;

/// Main error type for pinwheel operations
#[derive(Error, Diagnostic, Debug)]
pub enum PinwheelError {
    #[error("IO error: {0}")]
    #[diagnostic(code(pinwheel::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(pinwheel::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(pinwheel::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(pinwheel::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Codec error: {message}")]
    #[diagnostic(code(pinwheel::codec))]
    Codec {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, PinwheelError>;
