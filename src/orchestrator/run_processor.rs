//! 单次运行处理器 - 编排层
//!
//! ## 职责
//!
//! 1. **生命周期管理**：启动浏览器 → 等待登录 → 导航 → 接受请求 → 关闭浏览器
//! 2. **资源管理**：唯一持有 Browser 的模块，无论成败都先关闭浏览器再报告完成
//! 3. **错误兜底**：任何阶段传播上来的错误在这里转成日志，
//!    只终止本次运行，绝不终止宿主进程
//!
//! ## 设计特点
//!
//! - 一次触发对应一个 RunProcessor::run 调用，由调用方先抢到运行权
//! - 向下委托：登录检测、导航、接受循环都是 services / workflow 的事

use std::sync::Arc;

use chromiumoxide::Browser;

use crate::browser;
use crate::config::Config;
use crate::error::AppResult;
use crate::infrastructure::{CdpSession, PageSession};
use crate::models::{RunParameters, RunState};
use crate::services::{HumanDelay, LoginWatcher, Navigator};
use crate::utils::run_log::RunLog;
use crate::workflow::AcceptFlow;

/// 单次运行处理器
pub struct RunProcessor {
    config: Config,
    state: Arc<RunState>,
}

impl RunProcessor {
    pub fn new(config: Config, state: Arc<RunState>) -> Self {
        Self { config, state }
    }

    /// 执行一次完整运行
    ///
    /// 调用方必须先通过 RunState::try_start 拿到运行权。
    /// 返回时状态一定已经切到 Completed，浏览器一定已经关闭。
    pub async fn run(&self, params: RunParameters) {
        let log = self.state.log();
        log.info("Starting the automation process... Opening browser...");
        log.info(format!(
            "Configured Delay Times - Min: {} seconds, Max: {} seconds",
            params.delay_min_secs, params.delay_max_secs
        ));

        let delay = HumanDelay::new(params.delay_min_secs, params.delay_max_secs);

        let accepted = match browser::launch_browser().await {
            Ok((browser, page)) => {
                let session = CdpSession::new(page);
                let accepted = self.drive(&session, &delay, params.max_accepts).await;
                close_browser(browser, log).await;
                accepted
            }
            Err(e) => {
                log.error(format!(
                    "An unexpected error occurred during the automation process: {}",
                    e
                ));
                0
            }
        };

        self.state.finish(accepted);
    }

    /// 推进自动化主序列，任何传播上来的失败在这里转成一条错误日志
    async fn drive(
        &self,
        session: &dyn PageSession,
        delay: &HumanDelay,
        max_accepts: u32,
    ) -> u32 {
        match self.try_drive(session, delay, max_accepts).await {
            Ok(accepted) => accepted,
            Err(e) => {
                self.state.log().error(format!(
                    "An unexpected error occurred during the automation process: {}",
                    e
                ));
                0
            }
        }
    }

    async fn try_drive(
        &self,
        session: &dyn PageSession,
        delay: &HumanDelay,
        max_accepts: u32,
    ) -> AppResult<u32> {
        let log = self.state.log();
        let config = &self.config;

        // 第一步：打开登录页
        log.info(format!(
            "Navigating to Threads.net login page: {}",
            config.login_url
        ));
        session.goto(&config.login_url).await?;
        delay.pause(log).await;

        // 第二步：等待手动登录（包括两步验证）
        LoginWatcher::new(
            &config.home_url,
            config.explicit_wait_secs,
            config.url_poll_interval_ms,
        )
        .wait(session, log)
        .await?;

        // 第三步：进入关注请求页
        log.info(format!(
            "Navigating to follower requests page: {}",
            config.requests_url
        ));
        Navigator::new(config.explicit_wait_secs, config.url_poll_interval_ms)
            .navigate(session, &config.requests_url, delay, log)
            .await?;

        // 第四步：接受关注请求
        let flow = AcceptFlow::new(session, delay, log, &config.confirm_label);
        Ok(flow.run(max_accepts).await)
    }
}

/// 关闭浏览器
///
/// 每次运行只走到这里一次；关闭失败也只记日志，不再向上传播
async fn close_browser(mut browser: Browser, log: &RunLog) {
    if let Err(e) = browser.close().await {
        tracing::warn!("关闭浏览器失败: {}", e);
    }
    let _ = browser.wait().await;
    log.info("Browser closed. Automation process finished.");
}
