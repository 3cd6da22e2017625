//! 提交上下文
//!
//! 封装"这一次提交的是哪门课的哪道题"，在各步骤之间显式传递

use crate::models::{SubmissionLink, SubmissionReceipt};
use crate::services::GENERIC_EXERCISE_NAME;
use std::fmt::Display;

/// 单次提交的上下文
#[derive(Debug, Clone)]
pub struct SubmissionCtx {
    /// 源文件名（仅用于日志显示）
    pub file_name: String,

    /// 第一行解析出的链接
    pub link: SubmissionLink,

    /// 练习名称，获取失败时为通用名称
    pub exercise_name: String,

    /// 提交成功后的回执
    pub receipt: Option<SubmissionReceipt>,
}

impl SubmissionCtx {
    /// 创建新的提交上下文
    pub fn new(file_name: impl Into<String>, link: SubmissionLink) -> Self {
        Self {
            file_name: file_name.into(),
            link,
            exercise_name: GENERIC_EXERCISE_NAME.to_string(),
            receipt: None,
        }
    }

    pub fn with_exercise_name(mut self, name: impl Into<String>) -> Self {
        self.exercise_name = name.into();
        self
    }

    pub fn with_receipt(mut self, receipt: SubmissionReceipt) -> Self {
        self.receipt = Some(receipt);
        self
    }

    /// 结果页面地址
    pub fn result_page_url(&self) -> Option<&str> {
        self.receipt.as_ref().map(|r| r.result_page_url())
    }
}

impl Display for SubmissionCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{} 课程#{} 练习#{}]",
            self.file_name, self.link.course_id, self.link.exercise_id
        )
    }
}
