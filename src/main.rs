use anyhow::Result;
use threads_follower_accept::app::App;
use threads_follower_accept::config::Config;
use threads_follower_accept::logger;

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logger::init();

    // 加载配置
    let config = Config::from_env();

    // 初始化并运行应用
    App::initialize(config).await?.run().await?;

    Ok(())
}
