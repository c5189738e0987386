use std::ffi::OsStr;

use glob::{MatchOptions, Pattern};

/// 只作用于单个路径段（文件名）的 shell 风格通配符：`*`、`?`、`[...]`。
/// Windows 文件名不区分大小写，匹配也随之不区分。
const NAME_MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: cfg!(not(windows)),
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// 文件名过滤器
///
/// 无法编译的模式不报错，只是什么都不匹配。
#[derive(Debug, Clone)]
pub struct NamePattern {
    compiled: Option<Pattern>,
}

impl NamePattern {
    pub fn new(pattern: &str) -> Self {
        let compiled = match Pattern::new(pattern) {
            Ok(p) => Some(p),
            Err(e) => {
                log::warn!("[walk] pattern {:?} is malformed ({}), it will match nothing", pattern, e);
                None
            }
        };
        Self { compiled }
    }

    pub fn matches_name(&self, name: &OsStr) -> bool {
        match &self.compiled {
            Some(p) => p.matches_with(&name.to_string_lossy(), NAME_MATCH_OPTIONS),
            None => false,
        }
    }
}

impl Default for NamePattern {
    fn default() -> Self {
        Self::new(bigfiles_common::DEFAULT_PATTERN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(pattern: &str, name: &str) -> bool {
        NamePattern::new(pattern).matches_name(OsStr::new(name))
    }

    #[test]
    fn test_star() {
        assert!(m("*", "a.txt"));
        assert!(m("*", ".hidden"));
        assert!(m("*.txt", "a.txt"));
        assert!(!m("*.txt", "b.log"));
        assert!(!m("*.txt", "a.txt.bak"));
    }

    #[test]
    fn test_question_and_class() {
        assert!(m("?.log", "b.log"));
        assert!(!m("?.log", "bb.log"));
        assert!(m("[ab].txt", "a.txt"));
        assert!(!m("[ab].txt", "c.txt"));
        assert!(m("[!ab].txt", "c.txt"));
    }

    #[test]
    #[cfg(not(windows))]
    fn test_case_sensitive() {
        assert!(!m("*.TXT", "a.txt"));
        assert!(!m("README", "readme"));
    }

    #[test]
    #[cfg(windows)]
    fn test_case_insensitive_on_windows() {
        assert!(m("*.TXT", "a.txt"));
        assert!(m("README", "readme"));
    }

    #[test]
    fn test_separator_never_matches() {
        assert!(!m("sub/*.txt", "a.txt"));
    }

    #[test]
    fn test_malformed_matches_nothing() {
        assert!(!m("[unclosed", "[unclosed"));
        assert!(!m("[unclosed", "a.txt"));
    }
}
