use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResizerError {
    // 只有右边与下边有边缘手柄
    #[error("unknown resizer side '{0}'")]
    UnknownSide(String),

    #[error("failed to load resizer config {path}: {message}")]
    Config { path: PathBuf, message: String },
}
