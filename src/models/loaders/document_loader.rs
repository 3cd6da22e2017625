use crate::error::{AppError, AppResult};
use std::path::{Path, PathBuf};
use tokio::fs;

/// 当前要提交的源文件
#[derive(Debug, Clone)]
pub struct ActiveDocument {
    pub path: PathBuf,
    /// 文件的完整内容
    pub text: String,
}

impl ActiveDocument {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    /// 文件名（用于日志显示）
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string()
    }
}

/// 读取整个源文件
///
/// 路径不存在或不是普通文件时返回 `NoActiveDocument`。
pub async fn load_document(path: &Path) -> AppResult<ActiveDocument> {
    let metadata = match fs::metadata(path).await {
        Ok(metadata) => metadata,
        Err(_) => return Err(AppError::NoActiveDocument),
    };
    if !metadata.is_file() {
        return Err(AppError::NoActiveDocument);
    }

    let text = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::document_read_failed(path.display().to_string(), e))?;

    tracing::debug!("已读取 {} ({} 字节)", path.display(), text.len());

    Ok(ActiveDocument::new(path, text))
}
