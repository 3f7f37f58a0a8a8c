//! 页面导航 - 业务能力层

use tokio::time::{sleep, Duration, Instant};

use crate::error::{AppError, AppResult};
use crate::infrastructure::PageSession;
use crate::services::human_delay::HumanDelay;
use crate::utils::run_log::RunLog;

/// 导航确认器
///
/// 发起导航之后轮询当前地址，直到与目标完全一致才算到达；
/// 到达后执行一次延迟，把导航和后续动作隔开
pub struct Navigator {
    timeout_secs: u64,
    poll_interval_ms: u64,
}

impl Navigator {
    pub fn new(timeout_secs: u64, poll_interval_ms: u64) -> Self {
        Self {
            timeout_secs,
            poll_interval_ms,
        }
    }

    /// 导航到目标地址并确认到达，超时返回 NavigationTimeout（对本次运行致命）
    pub async fn navigate(
        &self,
        session: &dyn PageSession,
        target_url: &str,
        delay: &HumanDelay,
        log: &RunLog,
    ) -> AppResult<()> {
        session.goto(target_url).await?;

        let deadline = Instant::now() + Duration::from_secs(self.timeout_secs);
        loop {
            if session.current_url().await? == target_url {
                log.info(format!("Successfully navigated to {}", target_url));
                break;
            }

            if Instant::now() >= deadline {
                log.warn(format!("Timeout while navigating to {}", target_url));
                return Err(AppError::navigation_timeout(target_url, self.timeout_secs));
            }

            sleep(Duration::from_millis(self.poll_interval_ms)).await;
        }

        delay.pause(log).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// 假会话：goto 之后按脚本决定当前地址是否变成目标
    struct NavSession {
        arrives: bool,
        current: Mutex<String>,
    }

    impl NavSession {
        fn new(arrives: bool) -> Self {
            Self {
                arrives,
                current: Mutex::new("https://www.threads.net/".to_string()),
            }
        }
    }

    #[async_trait]
    impl PageSession for NavSession {
        async fn goto(&self, url: &str) -> AppResult<()> {
            if self.arrives {
                *self.current.lock().unwrap() = url.to_string();
            }
            Ok(())
        }

        async fn current_url(&self) -> AppResult<String> {
            Ok(self.current.lock().unwrap().clone())
        }

        async fn reload(&self) -> AppResult<()> {
            Ok(())
        }

        async fn count_buttons(&self, _label: &str) -> AppResult<usize> {
            Ok(0)
        }

        async fn scroll_button_into_view(&self, _label: &str, _index: usize) -> AppResult<()> {
            Ok(())
        }

        async fn click_button(&self, _label: &str, _index: usize) -> AppResult<()> {
            Ok(())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn confirms_arrival_and_delays_once() {
        let session = NavSession::new(true);
        let navigator = Navigator::new(90, 500);
        let delay = HumanDelay::new(1, 1);
        let log = RunLog::new();

        navigator
            .navigate(&session, "https://www.threads.net/activity/requests", &delay, &log)
            .await
            .expect("应确认到达");

        let snapshot = log.snapshot();
        assert!(snapshot.contains("Successfully navigated to"));
        assert!(snapshot.contains("Sleeping for"));
    }

    #[tokio::test(start_paused = true)]
    async fn times_out_when_target_never_loads() {
        let session = NavSession::new(false);
        let navigator = Navigator::new(3, 100);
        let delay = HumanDelay::new(1, 1);
        let log = RunLog::new();

        let err = navigator
            .navigate(&session, "https://www.threads.net/activity/requests", &delay, &log)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NavigationTimeout { .. }));
        assert!(log.snapshot().contains("Timeout while navigating to"));
    }
}
