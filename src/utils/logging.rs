/// 日志工具模块
///
/// 初始化 tracing 订阅器，默认级别 info，可用 RUST_LOG 覆盖
use tracing_subscriber::EnvFilter;

/// 初始化日志
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
