//! # Dodona Submit
//!
//! 把源文件提交到 Dodona 并等待评测结果的命令行工具
//!
//! 源文件第一行写上练习链接，工具会解析出课程和练习 ID，提交完整的文件内容，
//! 然后定时查询评测状态，直到得到最终结果。
//!
//! ## 架构设计
//!
//! ### ① 客户端层（Clients）
//! - `clients/` - Dodona HTTP API，只暴露 submit / 练习信息 / 状态查询
//!
//! ### ② 业务能力层（Services）
//! - `LinkExtractor` - 解析第一行的链接
//! - `build_submission` - 构建提交内容
//! - `describe_result` - 最终状态 → 结果描述
//! - `Reporter` - 输出窗口 / 错误弹窗 / 通知
//!
//! ### ③ 流程层（Workflow）
//! - `SubmissionCtx` - 单次提交的上下文
//! - `SubmissionMonitor` - 状态轮询
//! - `SubmissionFlow` - 流程编排（校验 → 解析 → 提交 → 轮询 → 输出）
//!
//! ### ④ 编排层（Orchestration）
//! - `App` - 初始化、运行、退出码

pub mod cli;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::{DodonaApi, DodonaClient};
pub use config::Config;
pub use error::{AppError, AppResult, ErrorKind, TransportError};
pub use models::{
    ActiveDocument, ExerciseInformation, SubmissionLink, SubmissionReceipt, SubmissionRecord,
    SubmissionStatus,
};
pub use orchestrator::App;
pub use services::{LinkExtractor, Reporter};
pub use workflow::{AttemptOutcome, SubmissionCtx, SubmissionFlow, SubmissionMonitor};
