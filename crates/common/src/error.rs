use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BigFilesError {
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Cannot read {path}: {source}")]
    Walk {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl BigFilesError {
    /// 将某路径上的 IO 错误归类：无权限单列，其余记为遍历错误
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::PermissionDenied {
            BigFilesError::PermissionDenied(path.display().to_string())
        } else {
            BigFilesError::Walk {
                path: path.display().to_string(),
                source: err,
            }
        }
    }
}
