//! 登录检测 - 业务能力层
//!
//! 凭据输入和两步验证全部由操作者在弹出的浏览器窗口里手动完成，
//! 这里只做一件事：轮询当前地址，直到和主页地址完全一致。

use tokio::time::{sleep, Duration, Instant};

use crate::error::{AppError, AppResult};
use crate::infrastructure::PageSession;
use crate::utils::run_log::RunLog;

/// 登录检测器
pub struct LoginWatcher {
    home_url: String,
    timeout_secs: u64,
    poll_interval_ms: u64,
}

impl LoginWatcher {
    pub fn new(home_url: impl Into<String>, timeout_secs: u64, poll_interval_ms: u64) -> Self {
        Self {
            home_url: home_url.into(),
            timeout_secs,
            poll_interval_ms,
        }
    }

    /// 等待手动登录完成
    ///
    /// 地址判断是精确相等，不做模式匹配；超时返回 LoginTimeout，对本次运行致命
    pub async fn wait(&self, session: &dyn PageSession, log: &RunLog) -> AppResult<()> {
        log.info("Waiting for manual login... Please complete the login in the opened browser window.");

        let deadline = Instant::now() + Duration::from_secs(self.timeout_secs);
        loop {
            if session.current_url().await? == self.home_url {
                log.info("Detected successful login to Threads.net.");
                return Ok(());
            }

            if Instant::now() >= deadline {
                log.warn("Timeout while waiting for login. Ensure you've completed the login process.");
                return Err(AppError::login_timeout(self.timeout_secs));
            }

            sleep(Duration::from_millis(self.poll_interval_ms)).await;
        }
    }
}
