use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::BigFilesError;

/// 默认展示的文件数
pub const DEFAULT_MAX_FILES: usize = 10;
/// 默认匹配全部文件
pub const DEFAULT_PATTERN: &str = "*";

/// 遍历中遇到无法读取的目录或文件时的处理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// 记录警告并跳过，继续遍历
    #[default]
    Skip,
    /// 遇到第一个错误即终止本次扫描
    Abort,
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorPolicy::Skip => f.write_str("skip"),
            ErrorPolicy::Abort => f.write_str("abort"),
        }
    }
}

impl FromStr for ErrorPolicy {
    type Err = BigFilesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skip" => Ok(ErrorPolicy::Skip),
            "abort" => Ok(ErrorPolicy::Abort),
            other => Err(BigFilesError::Config(format!(
                "unknown error policy: {} (expected skip or abort)",
                other
            ))),
        }
    }
}

/// 扫描配置
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub root: PathBuf,
    pub pattern: String,
    pub max_files: usize,
    pub error_policy: ErrorPolicy,
    /// 相对根目录的最大递归深度；None 表示不限制
    pub max_depth: Option<usize>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            pattern: DEFAULT_PATTERN.to_string(),
            max_files: DEFAULT_MAX_FILES,
            error_policy: ErrorPolicy::default(),
            max_depth: None,
        }
    }
}

impl ScanConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    pub fn with_max_files(mut self, max_files: usize) -> Self {
        self.max_files = max_files;
        self
    }

    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn validate(&self) -> Result<(), BigFilesError> {
        if self.pattern.is_empty() {
            return Err(BigFilesError::Config("pattern must not be empty".to_string()));
        }
        Ok(())
    }
}
