use thiserror::Error;

#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("Page range {start}-{end} out of bounds for {total}-page document")]
    PageRange { start: u32, end: u32, total: u32 },

    #[error("Invalid manifest: {0}")]
    Manifest(String),

    #[error("No text extracted from {0}")]
    EmptyText(String),

    #[error("Unmatched braces in LaTeX content. Open: {open}, Close: {close}")]
    UnbalancedBraces { open: usize, close: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Response parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, SummaryError>;
