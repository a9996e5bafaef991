use std::process::ExitCode;

use dotenv::dotenv;
use human_panic::setup_panic;
use tracing::{debug, error, warn};

// 从 lib.rs 导入模块
use rust_exercise_board::config::AppConfig;
use rust_exercise_board::errors::Result;
use rust_exercise_board::runtime::startup;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();

    // 记录程序启动时间
    let start_datetime = chrono::Utc::now();

    // 初始化配置
    setup_panic!();
    AppConfig::init().expect("Failed to initialize configuration");
    let config = AppConfig::get();

    // 初始化日志（输出到 stderr，stdout 留给 JSON 结果）
    let stderr_log = std::io::stderr();
    let (non_blocking_writer, _guard) = tracing_appender::non_blocking(stderr_log);
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    if config.is_development() {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_builder.json().init();
    }

    // 打印信息
    warn!(
        "Starting {}...
        Project: {}
        Version: {}
        Authors: {}",
        config.app.system_name,
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_AUTHORS")
    );

    let code = match run(config).await {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            #[cfg(debug_assertions)]
            eprintln!("{}", e.format_colored());
            error!("Failed to build exercise list: {}", e);
            ExitCode::FAILURE
        }
    };

    debug!(
        "Completed in {} ms",
        chrono::Utc::now()
            .signed_duration_since(start_datetime)
            .num_milliseconds()
    );

    code
}

/// 加载配置中的课程并输出练习列表 JSON
async fn run(config: &AppConfig) -> Result<String> {
    let context = startup::prepare_startup(config)?;
    let view = context
        .exercise_service
        .load_dashboard(context.course_id, &context.options)
        .await?;
    Ok(serde_json::to_string_pretty(&view)?)
}
