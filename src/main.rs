use anyhow::Result;
use clap::Parser;
use dodona_submit::cli::Cli;
use dodona_submit::orchestrator::EXIT_ERROR;
use dodona_submit::services::{ConsoleReporter, Reporter};
use dodona_submit::utils::logging;
use dodona_submit::{App, AppError, Config};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // 加载配置
    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            logging::init(cli.verbose);
            ConsoleReporter::new().error(&AppError::from(e).to_string());
            return Ok(ExitCode::from(EXIT_ERROR));
        }
    };

    // 初始化日志
    logging::init(cli.verbose || config.verbose_logging);

    // 初始化并运行应用
    let app = App::initialize(config)?;
    let code = app
        .run_to_exit_code(cli.file.as_deref(), !cli.no_wait)
        .await;

    Ok(ExitCode::from(code))
}
