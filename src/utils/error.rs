use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("XML parsing error: {0}")]
    XmlError(#[from] quick_xml::Error),

    #[error("unable to find {} on system", path.display())]
    TargetNotFound { path: PathBuf },

    #[error("unable to find matching file(s) at {} after filtering", path.display())]
    NoMatchingFiles { path: PathBuf },

    #[error("output file already exists at {}, use -f to overwrite", path.display())]
    OutputExists { path: PathBuf },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

pub type Result<T> = std::result::Result<T, AuditError>;
