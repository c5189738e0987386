use bigfiles_domain::ScanReport;

pub const NO_FILES_MESSAGE: &str = "No files were found.";

/// 每行：大小按最大值的位数右对齐，两个空格后接路径
pub fn format_results(report: &ScanReport) -> Vec<String> {
    let Some(largest) = report.largest_size() else {
        return vec![NO_FILES_MESSAGE.to_string()];
    };
    let width = largest.to_string().len();
    report
        .top_files
        .iter()
        .map(|r| format!(" {:>width$}  {}", r.size(), r.path().display(), width = width))
        .collect()
}
