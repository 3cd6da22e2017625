use thiserror::Error;

/// 应用程序错误类型
///
/// 每个变体对应一次提交中可能失败的一个环节，调用方通过 [`AppError::kind`]
/// 分支处理，不需要匹配错误文本。
#[derive(Debug, Error)]
pub enum AppError {
    /// 配置加载失败
    #[error("Settings could not be loaded: {0}")]
    Config(#[from] ConfigError),
    /// API key 为空
    #[error("Dodona API key is not set")]
    MissingApiKey,
    /// 没有可提交的文档
    #[error("No active document to submit")]
    NoActiveDocument,
    /// 文档存在但无法读取
    #[error("Could not read {path}: {source}")]
    DocumentRead {
        path: String,
        source: std::io::Error,
    },
    /// 第一行没有 Dodona 链接
    #[error("The first line of the file does not contain a Dodona exercise link")]
    LinkNotFound,
    /// 提交或查询状态时的网络错误
    #[error("Could not reach Dodona: {0}")]
    Transport(#[from] TransportError),
    /// 获取练习信息失败（非致命）
    #[error("Could not fetch exercise information: {0}")]
    MetadataFetch(TransportError),
    /// 已经有一次提交正在进行
    #[error("A submission is already in progress")]
    AttemptInProgress,
}

/// 错误类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Authentication,
    NoActiveDocument,
    LinkNotFound,
    Transport,
    MetadataFetch,
    AttemptInProgress,
}

impl ErrorKind {
    /// 是否终止本次提交
    pub fn is_fatal(self) -> bool {
        !matches!(self, ErrorKind::MetadataFetch)
    }
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Config(_) => ErrorKind::Configuration,
            AppError::MissingApiKey => ErrorKind::Authentication,
            AppError::NoActiveDocument | AppError::DocumentRead { .. } => {
                ErrorKind::NoActiveDocument
            }
            AppError::LinkNotFound => ErrorKind::LinkNotFound,
            AppError::Transport(_) => ErrorKind::Transport,
            AppError::MetadataFetch(_) => ErrorKind::MetadataFetch,
            AppError::AttemptInProgress => ErrorKind::AttemptInProgress,
        }
    }
}

/// 网络请求错误
#[derive(Debug, Error)]
pub enum TransportError {
    /// 请求发送失败
    #[error("request to {endpoint} failed: {source}")]
    RequestFailed {
        endpoint: String,
        source: reqwest::Error,
    },
    /// 服务器返回非 2xx 状态码
    #[error("{endpoint} answered with HTTP {status}")]
    BadStatus { endpoint: String, status: u16 },
    /// 响应体解析失败
    #[error("could not parse response from {endpoint}: {source}")]
    JsonParseFailed {
        endpoint: String,
        source: serde_json::Error,
    },
}

impl TransportError {
    pub fn endpoint(&self) -> &str {
        match self {
            TransportError::RequestFailed { endpoint, .. }
            | TransportError::BadStatus { endpoint, .. }
            | TransportError::JsonParseFailed { endpoint, .. } => endpoint,
        }
    }
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 读取配置文件失败
    #[error("cannot read {path}: {source}")]
    ReadFailed {
        path: String,
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("cannot parse {path}: {source}")]
    TomlParseFailed {
        path: String,
        source: toml::de::Error,
    },
    /// 环境变量解析失败
    #[error("environment variable {var_name}='{value}' is not a valid {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文档读取错误
    pub fn document_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::DocumentRead {
            path: path.into(),
            source,
        }
    }
}

impl TransportError {
    /// 创建请求失败错误
    pub fn request_failed(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        TransportError::RequestFailed {
            endpoint: endpoint.into(),
            source,
        }
    }

    /// 创建状态码错误
    pub fn bad_status(endpoint: impl Into<String>, status: u16) -> Self {
        TransportError::BadStatus {
            endpoint: endpoint.into(),
            status,
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
