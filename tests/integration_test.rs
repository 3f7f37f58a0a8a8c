use threads_follower_accept::browser::launch_browser;
use threads_follower_accept::config::Config;
use threads_follower_accept::infrastructure::{CdpSession, PageSession};
use threads_follower_accept::logger;

#[tokio::test]
#[ignore] // 默认忽略，需要手动运行：cargo test -- --ignored
async fn test_launch_and_close_browser() {
    // 初始化日志
    logger::init();

    // 启动浏览器
    let (mut browser, _page) = launch_browser().await.expect("启动浏览器失败");

    // 关闭浏览器
    browser.close().await.expect("关闭浏览器失败");
    let _ = browser.wait().await;
}

#[tokio::test]
#[ignore]
async fn test_open_login_page() {
    // 初始化日志
    logger::init();

    // 加载配置
    let config = Config::from_env();

    let (mut browser, page) = launch_browser().await.expect("启动浏览器失败");
    let session = CdpSession::new(page);

    session.goto(&config.login_url).await.expect("导航到登录页失败");
    let url = session.current_url().await.expect("读取当前地址失败");
    println!("当前地址: {}", url);
    assert!(!url.is_empty(), "应该能读到当前地址");

    browser.close().await.expect("关闭浏览器失败");
    let _ = browser.wait().await;
}

#[tokio::test]
#[ignore]
async fn test_blank_page_has_no_confirm_buttons() {
    // 初始化日志
    logger::init();

    // 加载配置
    let config = Config::from_env();

    let (mut browser, page) = launch_browser().await.expect("启动浏览器失败");
    let session = CdpSession::new(page);

    let count = session
        .count_buttons(&config.confirm_label)
        .await
        .expect("扫描确认按钮失败");
    assert_eq!(count, 0, "空白页不应该有确认按钮");

    browser.close().await.expect("关闭浏览器失败");
    let _ = browser.wait().await;
}
