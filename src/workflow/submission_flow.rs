//! 提交流程 - 流程层
//!
//! 核心职责：定义"一次提交"的完整处理流程
//!
//! 流程顺序：
//! 1. 校验前置条件（API key → 文档）
//! 2. 解析第一行的链接
//! 3. 构建提交内容
//! 4. 获取练习名称（失败则用通用名称）
//! 5. 提交
//! 6. 输出"已提交"
//! 7. 轮询状态
//! 8. 输出结果并弹出带链接的通知

use crate::clients::DodonaApi;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{load_document, ActiveDocument, SubmissionStatus};
use crate::services::{
    build_from_link, describe_result, LinkExtractor, Reporter, GENERIC_EXERCISE_NAME,
};
use crate::workflow::monitor::{PollOutcome, SubmissionMonitor};
use crate::workflow::submission_ctx::SubmissionCtx;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tracing::{info, warn};

/// 一次提交的结果
#[derive(Debug, Clone)]
pub struct AttemptOutcome {
    pub ctx: SubmissionCtx,
    /// 最终状态；没有等待结果时为 `None`
    pub status: Option<SubmissionStatus>,
    /// 给用户看的结果描述
    pub message: String,
}

impl AttemptOutcome {
    /// 是否通过
    pub fn is_accepted(&self) -> bool {
        matches!(self.status, Some(SubmissionStatus::Correct))
    }

    pub fn result_page_url(&self) -> Option<&str> {
        self.ctx.result_page_url()
    }
}

/// 提交流程
///
/// - 编排完整的提交流程
/// - 同一时间只允许一次提交
/// - 只依赖业务能力（services）和 API 客户端（clients）
pub struct SubmissionFlow {
    api: Arc<dyn DodonaApi>,
    reporter: Arc<dyn Reporter>,
    extractor: LinkExtractor,
    api_key: String,
    poll_interval: Duration,
    in_flight: Arc<Semaphore>,
}

impl SubmissionFlow {
    /// 创建新的提交流程
    pub fn new(config: &Config, api: Arc<dyn DodonaApi>, reporter: Arc<dyn Reporter>) -> Self {
        Self {
            api,
            reporter,
            extractor: LinkExtractor::new(),
            api_key: config.dodona_api_key.trim().to_string(),
            poll_interval: config.poll_interval(),
            in_flight: Arc::new(Semaphore::new(1)),
        }
    }

    /// 替换链接解析规则
    pub fn with_extractor(mut self, extractor: LinkExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    /// 读取文件并提交
    ///
    /// API key 在读取文件之前校验。
    pub async fn run_file(&self, path: Option<&Path>, wait: bool) -> AppResult<AttemptOutcome> {
        self.token()?;
        let document = match path {
            Some(path) => Some(load_document(path).await?),
            None => None,
        };
        self.run(document.as_ref(), wait).await
    }

    /// 提交一个已读取的文档
    ///
    /// `wait` 为 false 时提交后立即返回，不轮询。
    pub async fn run(
        &self,
        document: Option<&ActiveDocument>,
        wait: bool,
    ) -> AppResult<AttemptOutcome> {
        let _permit = self
            .in_flight
            .try_acquire()
            .map_err(|_| AppError::AttemptInProgress)?;

        // ========== 1. 前置条件 ==========
        let token = self.token()?;
        let document = document.ok_or(AppError::NoActiveDocument)?;

        // ========== 2-3. 解析链接并构建提交内容 ==========
        let link = self.extractor.extract(&document.text)?;
        let record = build_from_link(&link, &document.text);
        let ctx = SubmissionCtx::new(document.file_name(), link);

        info!("{} 📄 准备提交 ({} 字节)", ctx, record.code.len());

        // ========== 4. 练习名称（尽力而为） ==========
        let exercise_name = self.fetch_exercise_name(&ctx, token).await;
        let ctx = match exercise_name {
            Ok(name) => ctx.with_exercise_name(name),
            Err(e) => {
                warn!("{} ⚠️ {}，使用通用名称", ctx, e);
                ctx
            }
        };

        // ========== 5-6. 提交 ==========
        info!("{} 📤 正在提交到 Dodona...", ctx);
        let receipt = self.api.submit(&record, token).await?;
        let ctx = ctx.with_receipt(receipt.clone());

        self.reporter
            .output(&format!("Submitted your solution for {}.", ctx.exercise_name));
        info!("{} ✓ 提交成功: {}", ctx, receipt.status_url);

        if !wait {
            let message = format!(
                "Your solution for {} was submitted, results will appear at {}",
                ctx.exercise_name,
                receipt.result_page_url()
            );
            self.reporter.notify(&message, Some(receipt.result_page_url()));
            return Ok(AttemptOutcome {
                ctx,
                status: None,
                message,
            });
        }

        // ========== 7. 轮询 ==========
        let monitor = SubmissionMonitor::new(
            self.api.clone(),
            self.reporter.clone(),
            token,
            self.poll_interval,
        );
        let mut handle = monitor.start(receipt.status_url.clone());
        let outcome = handle.wait().await;

        // ========== 8. 结果 ==========
        let (status, message) = match outcome {
            PollOutcome::Finished(status) => {
                let message = describe_result(&ctx.exercise_name, &status);
                (Some(status), message)
            }
            PollOutcome::Stopped => (
                None,
                format!("Stopped checking the submission for {}.", ctx.exercise_name),
            ),
        };

        info!("{} 🏁 {}", ctx, message);
        self.reporter.output(&message);
        self.reporter.notify(&message, Some(receipt.result_page_url()));
        handle.reset();

        Ok(AttemptOutcome {
            ctx,
            status,
            message,
        })
    }

    fn token(&self) -> AppResult<&str> {
        if self.api_key.is_empty() {
            return Err(AppError::MissingApiKey);
        }
        Ok(&self.api_key)
    }

    async fn fetch_exercise_name(&self, ctx: &SubmissionCtx, token: &str) -> AppResult<String> {
        let info = self
            .api
            .fetch_exercise_info(&ctx.link.exercise_url(), token)
            .await
            .map_err(AppError::MetadataFetch)?;
        if info.name.trim().is_empty() {
            return Ok(GENERIC_EXERCISE_NAME.to_string());
        }
        Ok(info.name)
    }
}
