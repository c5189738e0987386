use std::time::Instant;

use bigfiles_common::{BigFilesError, ScanConfig};
use bigfiles_domain::ScanReport;

use crate::top_k::try_select_top_k;
use crate::walker::FileWalker;

/// 查找根目录下匹配模式的最大文件。
///
/// 根路径原样使用，不做任何改写；不存在或不是目录时返回空结果而非错误。
pub fn find_biggest_files(config: &ScanConfig) -> Result<ScanReport, BigFilesError> {
    config.validate()?;
    let start = Instant::now();
    let root = &config.root;

    log::info!(
        "[scan] start: root={}, pattern={:?}, max_files={}, on_error={}",
        root.display(),
        config.pattern,
        config.max_files,
        config.error_policy
    );

    if !root.is_dir() {
        log::info!("[scan] root is missing or not a directory: {}", root.display());
        return Ok(ScanReport {
            scan_time_ms: start.elapsed().as_millis() as u64,
            ..ScanReport::default()
        });
    }

    let mut walker = FileWalker::from_config(config);
    let mut matched_count = 0u64;
    let matched = walker.by_ref().inspect(|r| {
        if r.is_ok() {
            matched_count += 1;
        }
    });
    let top_files = try_select_top_k(matched, config.max_files)?;
    let skipped_count = walker.skipped();
    let scan_time_ms = start.elapsed().as_millis() as u64;

    log::info!(
        "[scan] done: root={}, matched={}, skipped={}, reported={}, elapsed={} ms",
        config.root.display(),
        matched_count,
        skipped_count,
        top_files.len(),
        scan_time_ms
    );

    Ok(ScanReport {
        top_files,
        matched_count,
        skipped_count,
        scan_time_ms,
    })
}
