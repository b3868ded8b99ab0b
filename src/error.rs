use miette::Diagnostic;
use thiserror::Error;

/// Main error type for showcase operations
#[derive(Error, Diagnostic, Debug)]
pub enum ShowcaseError {
    #[error("IO error: {0}")]
    #[diagnostic(code(showcase::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(showcase::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Document unavailable: {path}")]
    #[diagnostic(code(showcase::unavailable))]
    DocumentUnavailable { path: String },

    #[error("Parse error: {message}")]
    #[diagnostic(code(showcase::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(showcase::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Watch error: {0}")]
    #[diagnostic(code(showcase::watch))]
    Watch(#[from] notify::Error),
}

pub type Result<T> = std::result::Result<T, ShowcaseError>;
