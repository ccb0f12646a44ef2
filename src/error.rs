use miette::Diagnostic;
use thiserror::Error;

/// Main error type for cardface operations
#[derive(Error, Diagnostic, Debug)]
pub enum CardError {
    #[error("IO error: {0}")]
    #[diagnostic(code(cardface::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(cardface::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(cardface::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("XML error: {0}")]
    #[diagnostic(code(cardface::parse))]
    Xml(#[from] roxmltree::Error),

    /// A `{` without a matching `}`.
    #[error("Unterminated symbol token at byte {offset}")]
    #[diagnostic(
        code(cardface::markup),
        help("Close the symbol token or remove the stray opening brace")
    )]
    MalformedMarkup { offset: usize },

    /// A card record without the minimum information to be a card.
    #[error("Card {card} is missing required field {field}")]
    #[diagnostic(code(cardface::missing_field))]
    MissingRequiredField {
        card: String,
        field: &'static str,
        #[help]
        help: Option<String>,
    },

    #[error("Asset not found: {key} ({category})")]
    #[diagnostic(code(cardface::asset))]
    AssetNotFound { key: String, category: String },

    #[error("Build error: {message}")]
    #[diagnostic(code(cardface::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, CardError>;
