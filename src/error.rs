use miette::Diagnostic;
use thiserror::Error;

/// Main error type for avatar operations
#[derive(Error, Diagnostic, Debug)]
pub enum AvatarError {
    #[error("Invalid edge length: {value}")]
    #[diagnostic(
        code(avatar::dimension),
        help("Edge length must be greater than zero")
    )]
    InvalidDimension { value: i32 },

    #[error("IO error: {0}")]
    #[diagnostic(code(avatar::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(avatar::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(avatar::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Font error: {message}")]
    #[diagnostic(code(avatar::font))]
    Font {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Encode error: {message}")]
    #[diagnostic(code(avatar::encode))]
    Encode { message: String },
}

pub type Result<T> = std::result::Result<T, AvatarError>;
