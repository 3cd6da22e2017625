use serde::{Deserialize, Serialize};

/// 从源文件第一行解析出的 Dodona 链接
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionLink {
    pub course_id: u64,
    pub exercise_id: u64,
    /// 匹配到的原始子串
    pub raw_url: String,
}

impl SubmissionLink {
    /// 练习页面的绝对地址（匹配结果没有 scheme 时补上 https://）
    pub fn exercise_url(&self) -> String {
        if self.raw_url.starts_with("https://") || self.raw_url.starts_with("http://") {
            self.raw_url.clone()
        } else {
            format!("https://{}", self.raw_url)
        }
    }
}

/// 提交给 Dodona 的内容
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub code: String,
    pub course_id: u64,
    pub exercise_id: u64,
}

/// POST /submissions.json 的请求体：`{"submission": {...}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionEnvelope {
    pub submission: SubmissionRecord,
}

impl From<SubmissionRecord> for SubmissionEnvelope {
    fn from(submission: SubmissionRecord) -> Self {
        Self { submission }
    }
}

/// 提交成功后的回执
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubmissionReceipt {
    /// 轮询地址，约定以 `.json` 结尾
    #[serde(rename = "url")]
    pub status_url: String,
}

impl SubmissionReceipt {
    /// 给用户看的结果页面：去掉 `.json` 后缀
    pub fn result_page_url(&self) -> &str {
        self.status_url
            .strip_suffix(".json")
            .unwrap_or(&self.status_url)
    }
}

/// 练习元数据，只用来显示名称
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExerciseInformation {
    pub name: String,
}
