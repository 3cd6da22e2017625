//! 编排层（Orchestration Layer）
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator::App (初始化 / 退出码)
//!     ↓
//! workflow::SubmissionFlow (一次提交)
//!     ↓
//! workflow::SubmissionMonitor (轮询)
//!     ↓
//! services (能力层：链接解析 / 构建 / 结果描述 / 输出)
//!     ↓
//! clients (Dodona HTTP API)
//! ```

pub mod app;

pub use app::{exit_code_for, App, EXIT_ACCEPTED, EXIT_ERROR, EXIT_REJECTED};
