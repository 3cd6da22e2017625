//! 输出服务 - 业务能力层
//!
//! 只负责"把消息交给用户"，不关心流程

use tracing::{error, info};

/// 三种输出方式：输出窗口、错误弹窗、带链接的通知
pub trait Reporter: Send + Sync {
    /// 进度消息
    fn output(&self, message: &str);

    /// 致命错误
    fn error(&self, message: &str);

    /// 最终结果通知，可附带结果页面链接
    fn notify(&self, message: &str, link: Option<&str>);
}

/// 终端输出
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for ConsoleReporter {
    fn output(&self, message: &str) {
        info!("{}", message);
        println!("{}", message);
    }

    fn error(&self, message: &str) {
        error!("❌ {}", message);
        eprintln!("error: {}", message);
    }

    fn notify(&self, message: &str, link: Option<&str>) {
        info!("🔔 {}", message);
        match link {
            Some(link) => println!("{}\n  → {}", message, link),
            None => println!("{}", message),
        }
    }
}
