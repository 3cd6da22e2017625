//! 应用入口 - 编排层
//!
//! ## 职责
//!
//! 1. **应用初始化**：创建 HTTP 客户端和输出渠道
//! 2. **运行**：读取文件，委托 `SubmissionFlow` 完成提交
//! 3. **统计**：输出最终结果和退出码
//!
//! 只做调度，不做具体业务判断。

use crate::clients::DodonaClient;
use crate::config::Config;
use crate::error::AppResult;
use crate::services::{ConsoleReporter, Reporter};
use crate::utils::logging::{log_finished, log_startup, truncate_text};
use crate::workflow::{AttemptOutcome, SubmissionFlow};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// 退出码：通过
pub const EXIT_ACCEPTED: u8 = 0;
/// 退出码：出错
pub const EXIT_ERROR: u8 = 1;
/// 退出码：有最终结果但没有通过
pub const EXIT_REJECTED: u8 = 2;

/// 应用主结构
pub struct App {
    config: Config,
    reporter: Arc<dyn Reporter>,
    flow: SubmissionFlow,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> AppResult<Self> {
        let reporter: Arc<dyn Reporter> = Arc::new(ConsoleReporter::new());
        let client = DodonaClient::new(&config)?;
        let flow = SubmissionFlow::new(&config, Arc::new(client), reporter.clone());

        Ok(Self {
            config,
            reporter,
            flow,
        })
    }

    /// 使用自定义的流程和输出渠道
    pub fn with_flow(config: Config, flow: SubmissionFlow, reporter: Arc<dyn Reporter>) -> Self {
        Self {
            config,
            reporter,
            flow,
        }
    }

    /// 运行一次提交
    pub async fn run(&self, file: Option<&Path>, wait: bool) -> AppResult<AttemptOutcome> {
        log_startup(&self.config, file);

        let outcome = self.flow.run_file(file, wait).await?;

        debug!("结果描述: {}", truncate_text(&outcome.message, 120));
        log_finished(
            outcome
                .status
                .as_ref()
                .map(|s| s.as_str())
                .unwrap_or("submitted"),
            outcome.result_page_url(),
        );

        Ok(outcome)
    }

    /// 运行并把结果转换为退出码；错误交给错误弹窗
    pub async fn run_to_exit_code(&self, file: Option<&Path>, wait: bool) -> u8 {
        match self.run(file, wait).await {
            Ok(outcome) => exit_code_for(&outcome),
            Err(e) => {
                self.reporter.error(&e.to_string());
                EXIT_ERROR
            }
        }
    }
}

/// 结果对应的退出码
pub fn exit_code_for(outcome: &AttemptOutcome) -> u8 {
    match &outcome.status {
        None => EXIT_ACCEPTED,
        Some(_) if outcome.is_accepted() => EXIT_ACCEPTED,
        Some(_) => EXIT_REJECTED,
    }
}
