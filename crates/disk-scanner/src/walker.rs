//! 惰性目录遍历：深度优先走完根目录下每个子目录，按文件名模式过滤，
//! 只产出普通文件（以及指向普通文件的符号链接）及其大小。
//!
//! 迭代器一次性、不可重启；中途丢弃即等于取消，没有副作用。

use std::io;
use std::path::Path;

use bigfiles_common::{BigFilesError, ErrorPolicy, ScanConfig};
use bigfiles_domain::FileRecord;
use walkdir::{DirEntry, WalkDir};

use crate::filters::NamePattern;

pub struct FileWalker {
    inner: Option<walkdir::IntoIter>,
    pattern: NamePattern,
    policy: ErrorPolicy,
    skipped: u64,
}

impl FileWalker {
    pub fn new(root: impl AsRef<Path>, pattern: NamePattern) -> Self {
        Self::build(root.as_ref(), pattern, None)
    }

    pub fn from_config(config: &ScanConfig) -> Self {
        Self::build(&config.root, NamePattern::new(&config.pattern), config.max_depth)
            .with_error_policy(config.error_policy)
    }

    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    fn build(root: &Path, pattern: NamePattern, max_depth: Option<usize>) -> Self {
        let inner = if root.is_dir() {
            let mut walk = WalkDir::new(root)
                .follow_links(false)
                .min_depth(1)
                .sort_by_file_name();
            if let Some(depth) = max_depth {
                walk = walk.max_depth(depth);
            }
            Some(walk.into_iter())
        } else {
            log::debug!("[walk] {} is not a directory, nothing to walk", root.display());
            None
        };
        Self {
            inner,
            pattern,
            policy: ErrorPolicy::default(),
            skipped: 0,
        }
    }

    /// 按 Skip 策略跳过的条目数
    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    /// Skip：记数并返回 None；Abort：结束遍历并把错误交给调用方
    fn fail(&mut self, err: BigFilesError) -> Option<BigFilesError> {
        match self.policy {
            ErrorPolicy::Skip => {
                log::warn!("[walk] skipping: {}", err);
                self.skipped += 1;
                None
            }
            ErrorPolicy::Abort => {
                log::debug!("[walk] aborting: {}", err);
                self.inner = None;
                Some(err)
            }
        }
    }
}

impl Iterator for FileWalker {
    type Item = Result<FileRecord, BigFilesError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let next = self.inner.as_mut()?.next();
            let entry = match next? {
                Ok(entry) => entry,
                Err(err) => match self.fail(walk_error(err)) {
                    Some(err) => return Some(Err(err)),
                    None => continue,
                },
            };

            // 目录只递归，不产出
            if entry.file_type().is_dir() {
                continue;
            }
            if !self.pattern.matches_name(entry.file_name()) {
                continue;
            }

            match regular_file_size(&entry) {
                Ok(Some(size)) => {
                    log::trace!("[walk] match: {} ({} bytes)", entry.path().display(), size);
                    return Some(Ok(FileRecord::new(entry.into_path(), size)));
                }
                Ok(None) => continue,
                Err(err) => match self.fail(err) {
                    Some(err) => return Some(Err(err)),
                    None => continue,
                },
            }
        }
    }
}

/// 普通文件返回大小；符号链接按目标判断；目录链接、悬空链接、设备等返回 None
fn regular_file_size(entry: &DirEntry) -> Result<Option<u64>, BigFilesError> {
    let file_type = entry.file_type();
    if file_type.is_file() {
        let meta = entry.metadata().map_err(walk_error)?;
        return Ok(Some(meta.len()));
    }
    if file_type.is_symlink() {
        return match std::fs::metadata(entry.path()) {
            Ok(meta) if meta.is_file() => Ok(Some(meta.len())),
            Ok(_) => Ok(None),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(BigFilesError::from_io(entry.path(), e)),
        };
    }
    Ok(None)
}

fn walk_error(err: walkdir::Error) -> BigFilesError {
    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    let message = err.to_string();
    match err.into_io_error() {
        Some(io_err) => BigFilesError::from_io(&path, io_err),
        None => BigFilesError::Walk {
            path: path.display().to_string(),
            source: io::Error::other(message),
        },
    }
}
