//! 日志初始化

use tracing_subscriber::EnvFilter;

/// 初始化 tracing 控制台日志
///
/// 默认 info 级别，可通过 RUST_LOG 环境变量覆盖。
/// 重复调用时静默忽略，方便在测试里使用。
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .ok();
}
