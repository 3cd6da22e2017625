//! 命令行参数

use clap::Parser;
use std::path::PathBuf;

/// 把源文件提交到 Dodona，并等待评测结果
///
/// 文件第一行需要包含练习链接，例如
/// `# https://dodona.ugent.be/en/courses/12/series/3/activities/456`
#[derive(Parser, Debug)]
#[command(name = "dodona-submit", version, about)]
pub struct Cli {
    /// 要提交的源文件
    pub file: Option<PathBuf>,
    /// 配置文件路径，默认读取当前目录下的 dodona.toml
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// 输出调试日志
    #[arg(long, short)]
    pub verbose: bool,
    /// 提交后不等待评测结果
    #[arg(long)]
    pub no_wait: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::try_parse_from([
            "dodona-submit",
            "solution.py",
            "--config",
            "my.toml",
            "--verbose",
            "--no-wait",
        ])
        .unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("solution.py")));
        assert_eq!(cli.config, Some(PathBuf::from("my.toml")));
        assert!(cli.verbose);
        assert!(cli.no_wait);
    }

    #[test]
    fn test_file_is_optional() {
        let cli = Cli::try_parse_from(["dodona-submit"]).unwrap();
        assert!(cli.file.is_none());
        assert!(!cli.no_wait);
    }
}
