//! 关注请求接受流程 - 流程层
//!
//! 核心职责：定义"一轮接受"的完整流程
//!
//! 流程顺序：
//! 1. 扫描页面上文本完全匹配的确认按钮
//! 2. 逐个滚动到可视区域并点击，每步之间随机延迟
//! 3. 数量未达标就刷新页面重新扫描
//!
//! 失败语义：
//! - 单次点击失败：记警告后跳过，同一轮内不重试该按钮
//! - 扫描或刷新失败：安静地结束循环，保留已完成的数量
//! - 本流程不产生致命错误，返回值永远是实际接受数

use crate::error::AppResult;
use crate::infrastructure::PageSession;
use crate::services::HumanDelay;
use crate::utils::run_log::RunLog;

/// 接受流程
///
/// - 编排扫描 → 点击 → 刷新的循环
/// - 不持有任何资源（Page）
/// - 只依赖会话能力与延迟能力
pub struct AcceptFlow<'a> {
    session: &'a dyn PageSession,
    delay: &'a HumanDelay,
    log: &'a RunLog,
    confirm_label: &'a str,
}

impl<'a> AcceptFlow<'a> {
    /// 创建新的接受流程
    pub fn new(
        session: &'a dyn PageSession,
        delay: &'a HumanDelay,
        log: &'a RunLog,
        confirm_label: &'a str,
    ) -> Self {
        Self {
            session,
            delay,
            log,
            confirm_label,
        }
    }

    /// 接受最多 max_accepts 条关注请求，返回实际接受数量
    ///
    /// 循环只受两件事终止：数量达标，或者某次扫描找不到任何按钮。
    /// 刷新重扫没有额外的次数上限。
    pub async fn run(&self, max_accepts: u32) -> u32 {
        let mut accepted: u32 = 0;
        self.log.info(format!(
            "Attempting to accept up to {} follower requests...",
            max_accepts
        ));

        while accepted < max_accepts {
            let found = match self.session.count_buttons(self.confirm_label).await {
                Ok(count) => count,
                Err(e) => {
                    self.log.error(format!(
                        "An unexpected error occurred while accepting requests: {}",
                        e
                    ));
                    break;
                }
            };

            if found == 0 {
                self.log.info(
                    "No 'Confirm' buttons found. Possibly no more follower requests or page structure has changed.",
                );
                break;
            }

            for index in 0..found {
                if accepted >= max_accepts {
                    break;
                }
                match self.accept_one(index).await {
                    Ok(()) => {
                        accepted += 1;
                        self.log
                            .info(format!("Accepted follower request #{}", accepted));
                        self.delay.pause(self.log).await;
                    }
                    Err(e) => {
                        self.log
                            .warn(format!("Failed to click 'Confirm' button: {}", e));
                        self.delay.pause(self.log).await;
                    }
                }
            }

            if accepted < max_accepts {
                self.log.info(
                    "Refreshing the follower requests list to find more 'Confirm' buttons.",
                );
                if let Err(e) = self.session.reload().await {
                    self.log.error(format!(
                        "An unexpected error occurred while accepting requests: {}",
                        e
                    ));
                    break;
                }
                self.delay.pause(self.log).await;
            }
        }

        self.log.info(format!(
            "Completed accepting follower requests. Total accepted: {}",
            accepted
        ));
        accepted
    }

    /// 滚动到指定按钮并点击
    async fn accept_one(&self, index: usize) -> AppResult<()> {
        self.session
            .scroll_button_into_view(self.confirm_label, index)
            .await?;
        self.delay.pause(self.log).await;
        self.session.click_button(self.confirm_label, index).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    const LABEL: &str = "Confirm";

    /// 假会话：页面上有固定数量的按钮，点击一个就少一个
    struct CountdownSession {
        remaining: Mutex<usize>,
        clicks: AtomicUsize,
        reloads: AtomicUsize,
    }

    impl CountdownSession {
        fn new(buttons: usize) -> Self {
            Self {
                remaining: Mutex::new(buttons),
                clicks: AtomicUsize::new(0),
                reloads: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl PageSession for CountdownSession {
        async fn goto(&self, _url: &str) -> AppResult<()> {
            Ok(())
        }

        async fn current_url(&self) -> AppResult<String> {
            Ok("https://www.threads.net/activity/requests".to_string())
        }

        async fn reload(&self) -> AppResult<()> {
            self.reloads.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn count_buttons(&self, _label: &str) -> AppResult<usize> {
            Ok(*self.remaining.lock().unwrap())
        }

        async fn scroll_button_into_view(&self, _label: &str, _index: usize) -> AppResult<()> {
            Ok(())
        }

        async fn click_button(&self, _label: &str, index: usize) -> AppResult<()> {
            let mut remaining = self.remaining.lock().unwrap();
            if *remaining == 0 {
                return Err(AppError::click_failure(index, "确认按钮已不在页面上"));
            }
            *remaining -= 1;
            self.clicks.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    /// 假会话：第一个按钮永远点不动，其余正常
    struct FlakySession {
        inner: CountdownSession,
        failed: AtomicUsize,
    }

    #[async_trait]
    impl PageSession for FlakySession {
        async fn goto(&self, url: &str) -> AppResult<()> {
            self.inner.goto(url).await
        }

        async fn current_url(&self) -> AppResult<String> {
            self.inner.current_url().await
        }

        async fn reload(&self) -> AppResult<()> {
            self.inner.reload().await
        }

        async fn count_buttons(&self, label: &str) -> AppResult<usize> {
            self.inner.count_buttons(label).await
        }

        async fn scroll_button_into_view(&self, label: &str, index: usize) -> AppResult<()> {
            self.inner.scroll_button_into_view(label, index).await
        }

        async fn click_button(&self, label: &str, index: usize) -> AppResult<()> {
            if index == 0 {
                self.failed.fetch_add(1, Ordering::SeqCst);
                return Err(AppError::click_failure(index, "被其他元素遮挡"));
            }
            self.inner.click_button(label, index).await
        }
    }

    /// 假会话：扫描直接报错（页面已经不在了）
    struct BrokenSession;

    #[async_trait]
    impl PageSession for BrokenSession {
        async fn goto(&self, _url: &str) -> AppResult<()> {
            Ok(())
        }

        async fn current_url(&self) -> AppResult<String> {
            Ok(String::new())
        }

        async fn reload(&self) -> AppResult<()> {
            Ok(())
        }

        async fn count_buttons(&self, _label: &str) -> AppResult<usize> {
            Err(AppError::scan_failure("页面已关闭"))
        }

        async fn scroll_button_into_view(&self, _label: &str, _index: usize) -> AppResult<()> {
            Ok(())
        }

        async fn click_button(&self, _label: &str, _index: usize) -> AppResult<()> {
            Ok(())
        }
    }

    fn delay() -> HumanDelay {
        HumanDelay::new(1, 1)
    }

    #[tokio::test(start_paused = true)]
    async fn empty_first_scan_returns_zero() {
        let session = CountdownSession::new(0);
        let log = RunLog::new();
        let d = delay();
        let flow = AcceptFlow::new(&session, &d, &log, LABEL);

        assert_eq!(flow.run(5).await, 0);
        assert_eq!(session.clicks.load(Ordering::SeqCst), 0);
        assert!(log.snapshot().contains("No 'Confirm' buttons found"));
    }

    #[tokio::test(start_paused = true)]
    async fn single_request_accepted_and_loop_ends() {
        let session = CountdownSession::new(1);
        let log = RunLog::new();
        let d = delay();
        let flow = AcceptFlow::new(&session, &d, &log, LABEL);

        assert_eq!(flow.run(1).await, 1);
        assert_eq!(session.clicks.load(Ordering::SeqCst), 1);
        // 数量达标，不应再刷新
        assert_eq!(session.reloads.load(Ordering::SeqCst), 0);
        assert!(log.snapshot().contains("Accepted follower request #1"));
    }

    #[tokio::test(start_paused = true)]
    async fn stops_early_when_requests_run_out() {
        let session = CountdownSession::new(2);
        let log = RunLog::new();
        let d = delay();
        let flow = AcceptFlow::new(&session, &d, &log, LABEL);

        // 目标 3 条，但页面上只出现过 2 条：刷新后扫描为空，干净收尾
        assert_eq!(flow.run(3).await, 2);
        assert_eq!(session.clicks.load(Ordering::SeqCst), 2);
        assert_eq!(session.reloads.load(Ordering::SeqCst), 1);
        assert!(log.snapshot().contains("Total accepted: 2"));
    }

    #[tokio::test(start_paused = true)]
    async fn never_exceeds_requested_count() {
        let session = CountdownSession::new(10);
        let log = RunLog::new();
        let d = delay();
        let flow = AcceptFlow::new(&session, &d, &log, LABEL);

        assert_eq!(flow.run(4).await, 4);
        assert_eq!(session.clicks.load(Ordering::SeqCst), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn click_failure_is_skipped_not_fatal() {
        let session = FlakySession {
            inner: CountdownSession::new(3),
            failed: AtomicUsize::new(0),
        };
        let log = RunLog::new();
        let d = delay();
        let flow = AcceptFlow::new(&session, &d, &log, LABEL);

        let accepted = flow.run(2).await;
        assert_eq!(accepted, 2);
        assert!(session.failed.load(Ordering::SeqCst) >= 1);
        assert!(log.snapshot().contains("Failed to click 'Confirm' button"));
    }

    #[tokio::test(start_paused = true)]
    async fn scan_failure_ends_loop_quietly() {
        let session = BrokenSession;
        let log = RunLog::new();
        let d = delay();
        let flow = AcceptFlow::new(&session, &d, &log, LABEL);

        assert_eq!(flow.run(3).await, 0);
        let snapshot = log.snapshot();
        assert!(snapshot.contains("An unexpected error occurred while accepting requests"));
        assert!(snapshot.contains("Total accepted: 0"));
    }
}
