use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("File error: {0}.")]
    FileError(String),

    #[error("Unsupported settings file type: {0}.")]
    UnsupportedFileType(String),

    #[error("Failed to parse settings file '{file}': {reason}.")]
    ParseError { file: String, reason: String },
}
