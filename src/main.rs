// ==========================================
// 船舶正午报告控制台 - 主入口
// ==========================================
// 单线程事件循环: 每次用户输入完成一次请求/响应后再处理下一条
// ==========================================

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncWriteExt, BufReader};

use noon_report_console::app::{terminal, ConsoleOptions, EntryConsole};
use noon_report_console::config::{ConsoleArgs, ConsoleConfig};
use noon_report_console::{i18n, logging, HttpBackend};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = ConsoleConfig::try_from(ConsoleArgs::parse()).context("配置无效")?;

    // 初始化日志系统
    logging::init(config.log_format);
    i18n::set_locale(&config.locale);

    tracing::info!("==================================================");
    tracing::info!("{} {}", noon_report_console::APP_NAME, noon_report_console::VERSION);
    tracing::info!("后端地址: {}", config.base_url);
    tracing::info!("==================================================");

    let backend = HttpBackend::new(&config.base_url, config.request_timeout)
        .context("无法创建后端客户端")?;
    let mut console = EntryConsole::new(backend, ConsoleOptions::from(&config));

    let mut stdout = tokio::io::stdout();
    let welcome = i18n::t_with_args("console.welcome", &[("base_url", config.base_url.as_str())]);
    stdout.write_all(format!("{}\n", welcome).as_bytes()).await?;

    let stdin = BufReader::new(tokio::io::stdin());
    terminal::run(&mut console, stdin, &mut stdout).await?;

    tracing::info!("控制台已退出");
    Ok(())
}
