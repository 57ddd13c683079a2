use clap::Parser;
use docx_analyzer::cli::Cli;
use docx_analyzer::config::Config;
use docx_analyzer::orchestrator::Analyzer;
use docx_analyzer::utils::logging;
use tracing::error;

#[tokio::main]
async fn main() {
    // 初始化日志
    logging::init();

    // 解析命令行参数
    let cli = Cli::parse();

    if !cli.directory.exists() {
        error!("错误: 目录 '{}' 不存在", cli.directory.display());
        std::process::exit(1);
    }

    // 加载配置并运行
    let config = Config::from_cli(cli);
    let analyzer = Analyzer::new(config);

    if let Err(e) = analyzer.run().await {
        error!("分析过程中发生错误: {}", e);
        std::process::exit(1);
    }
}
