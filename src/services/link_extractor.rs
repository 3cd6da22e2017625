//! 链接解析服务 - 业务能力层
//!
//! 只负责从源文件第一行找出 Dodona 链接

use crate::error::{AppError, AppResult};
use crate::models::SubmissionLink;
use regex::Regex;

/// 链接匹配规则：正则 + 课程 / 练习 ID 所在的捕获组
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkPattern {
    pub pattern: &'static str,
    pub course_group: usize,
    pub exercise_group: usize,
}

/// 默认规则
///
/// scheme 和两位语言段都可省略；捕获组 1 是课程，2 是系列，3 是练习。
pub const DEFAULT_LINK_PATTERN: LinkPattern = LinkPattern {
    pattern: r"(?:https://)?dodona\.ugent\.be/(?:[a-z]{2}/)?courses/(\d+)/series/(\d+)/activities/(\d+)",
    course_group: 1,
    exercise_group: 3,
};

/// 链接解析器
pub struct LinkExtractor {
    regex: Regex,
    pattern: LinkPattern,
}

impl LinkExtractor {
    /// 使用默认规则
    pub fn new() -> Self {
        // 默认规则是常量，编译失败只可能是代码错误
        Self::with_pattern(DEFAULT_LINK_PATTERN).expect("default link pattern must compile")
    }

    /// 使用自定义规则
    pub fn with_pattern(pattern: LinkPattern) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern.pattern)?,
            pattern,
        })
    }

    /// 从文件内容的第一行解析链接
    ///
    /// 后续行的内容不影响结果；没有匹配时返回 `LinkNotFound`。
    pub fn extract(&self, text: &str) -> AppResult<SubmissionLink> {
        let line = first_line(text);
        let caps = self.regex.captures(line).ok_or(AppError::LinkNotFound)?;

        let id_at = |group: usize| -> AppResult<u64> {
            caps.get(group)
                .and_then(|m| m.as_str().parse().ok())
                .ok_or(AppError::LinkNotFound)
        };

        let link = SubmissionLink {
            course_id: id_at(self.pattern.course_group)?,
            exercise_id: id_at(self.pattern.exercise_group)?,
            raw_url: caps
                .get(0)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default(),
        };

        tracing::debug!(
            "解析到链接: 课程 {} 练习 {} ({})",
            link.course_id,
            link.exercise_id,
            link.raw_url
        );

        Ok(link)
    }
}

impl Default for LinkExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// 第一个换行符（`\n` 或 `\r`）之前的内容
fn first_line(text: &str) -> &str {
    text.split(['\n', '\r']).next().unwrap_or("")
}
