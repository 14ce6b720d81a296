use miette::Diagnostic;
use thiserror::Error;

/// Main error type for veil operations
#[derive(Error, Diagnostic, Debug)]
pub enum VeilError {
    #[error("IO error: {0}")]
    #[diagnostic(code(veil::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(veil::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Image error with {path}: {message}")]
    #[diagnostic(code(veil::image))]
    Image {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(veil::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Shape error: {message}")]
    #[diagnostic(code(veil::shape))]
    Shape {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, VeilError>;
