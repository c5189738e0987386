//! 日志初始化：统一走 `log` 门面，后端为 env_logger，输出到 stderr，
//! 结果行写 stdout，两者互不干扰。

use log::LevelFilter;

/// 命令行 `-v` 次数对应的日志级别
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// 初始化日志；设置了 `RUST_LOG` 时以环境变量为准。重复调用不会报错。
pub fn init_logging(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for_verbosity(verbosity))
        .format_timestamp(None)
        .target(env_logger::Target::Stderr);
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }
    let _ = builder.try_init();
}
