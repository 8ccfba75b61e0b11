use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolchainError {
    #[error("platform package {0} not found")]
    PackageNotFound(String),

    #[error("PlatformIO package {package} does not have {executable}")]
    ExecutableNotFound { package: String, executable: String },

    #[error("cannot find {0} on PATH")]
    NotOnPath(String),

    #[error("cannot locate the PlatformIO home directory; set PLATFORMIO_CORE_DIR or [platformio] home")]
    HomeNotFound,
}
