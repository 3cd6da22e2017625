use serde::Deserialize;

/// 提交状态
///
/// 只有 `Queued` / `Running` 表示评测仍在进行，其余（包括未知值）都视为最终结果。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum SubmissionStatus {
    /// 排队中
    Queued,
    /// 评测中
    Running,
    /// 正确
    Correct,
    /// 错误
    Wrong,
    /// 编译错误
    CompilationError,
    /// 其它最终状态，原样保留
    Other(String),
}

impl SubmissionStatus {
    /// 服务端使用的字符串
    pub fn as_str(&self) -> &str {
        match self {
            SubmissionStatus::Queued => "queued",
            SubmissionStatus::Running => "running",
            SubmissionStatus::Correct => "correct",
            SubmissionStatus::Wrong => "wrong",
            SubmissionStatus::CompilationError => "compilation error",
            SubmissionStatus::Other(s) => s,
        }
    }

    /// 从服务端字符串解析，未知值落入 `Other`
    pub fn from_wire(s: &str) -> Self {
        match s {
            "queued" => SubmissionStatus::Queued,
            "running" => SubmissionStatus::Running,
            "correct" => SubmissionStatus::Correct,
            "wrong" => SubmissionStatus::Wrong,
            "compilation error" => SubmissionStatus::CompilationError,
            other => SubmissionStatus::Other(other.to_string()),
        }
    }

    /// 是否仍在评测
    pub fn is_in_progress(&self) -> bool {
        matches!(self, SubmissionStatus::Queued | SubmissionStatus::Running)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_in_progress()
    }
}

impl From<String> for SubmissionStatus {
    fn from(s: String) -> Self {
        Self::from_wire(&s)
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
