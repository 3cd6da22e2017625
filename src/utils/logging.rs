/// 日志工具模块
///
/// 提供日志初始化和输出的辅助函数
use crate::config::Config;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// `RUST_LOG` 优先；否则为 info，`verbose` 时为 debug。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{default_level},reqwest=info,hyper=info")));

    // 重复初始化（例如测试中）时忽略错误
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config, file: Option<&Path>) {
    info!("{}", "=".repeat(60));
    info!("🚀 Dodona 提交 - {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
    info!("🌐 服务地址: {}", config.base_url);
    match file {
        Some(path) => info!("📄 文件: {}", path.display()),
        None => info!("📄 文件: (未指定)"),
    }
    info!("{}", "=".repeat(60));
}

/// 记录提交结束信息
pub fn log_finished(status: &str, result_page: Option<&str>) {
    info!("\n{}", "─".repeat(60));
    info!(
        "🏁 完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("📊 最终状态: {}", status);
    if let Some(url) = result_page {
        info!("🔗 结果页面: {}", url);
    }
    info!("{}", "─".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("print('hi')", 5), "print...");
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("héllo", 2), "hé...");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(false);
        init(true);
    }
}
