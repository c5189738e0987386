use crate::FileRecord;

/// 一次扫描的结果：按大小降序的前 N 个文件及各项计数
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub top_files: Vec<FileRecord>,
    /// 匹配模式的文件总数（不只是进入前 N 的）
    pub matched_count: u64,
    /// 因无法读取而跳过的条目数
    pub skipped_count: u64,
    pub scan_time_ms: u64,
}

impl ScanReport {
    pub fn is_empty(&self) -> bool {
        self.top_files.is_empty()
    }

    pub fn largest_size(&self) -> Option<u64> {
        self.top_files.first().map(FileRecord::size)
    }
}
