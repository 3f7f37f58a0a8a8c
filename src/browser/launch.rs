use anyhow::Result;
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use tokio::time::sleep;
use tracing::{debug, error, info};

/// 启动带界面的浏览器
///
/// 登录需要操作者手动完成，所以必须带界面；窗口最大化方便看到确认按钮
pub async fn launch_browser() -> Result<(Browser, Page)> {
    info!("🚀 启动浏览器...");

    let config = BrowserConfig::builder()
        .with_head()
        .args(vec![
            "--disable-infobars",
            "--disable-extensions",
            "--disable-gpu",
            "--no-sandbox",
            "--start-maximized",
        ])
        .build()
        .map_err(|e| {
            error!("配置浏览器失败: {}", e);
            anyhow::anyhow!("配置浏览器失败: {}", e)
        })?;

    let (browser, mut handler) = Browser::launch(config).await.map_err(|e| {
        error!("启动浏览器失败: {}", e);
        anyhow::anyhow!("启动浏览器失败: {}", e)
    })?;
    debug!("浏览器启动成功");

    // 在后台处理浏览器事件
    tokio::spawn(async move {
        while let Some(h) = handler.next().await {
            if h.is_err() {
                break;
            }
        }
    });

    // 添加短暂延迟以等待浏览器状态同步
    sleep(tokio::time::Duration::from_millis(300)).await;

    let page = browser.new_page("about:blank").await.map_err(|e| {
        error!("创建页面失败: {}", e);
        anyhow::anyhow!("创建页面失败: {}", e)
    })?;

    info!("✅ 浏览器已就绪");

    Ok((browser, page))
}
