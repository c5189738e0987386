use std::path::{Path, PathBuf};

/// 一个匹配到的文件：路径与读取时的大小（字节）。
///
/// 大小取自单次 stat，之后文件若被修改，这里的值可能已过期。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    path: PathBuf,
    size: u64,
}

impl FileRecord {
    pub fn new(path: impl Into<PathBuf>, size: u64) -> Self {
        Self {
            path: path.into(),
            size,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn size(&self) -> u64 {
        self.size
    }
}
