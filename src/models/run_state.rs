//! 运行状态
//!
//! 进程内唯一的可变实体。状态流转：
//!
//! ```text
//! NotStarted → Running → Completed → Running → …
//! ```
//!
//! try_start 用原子 CAS 抢运行权，同一时刻最多只有一个 Running；
//! 浏览器关闭之后编排器才会调用 finish 切到 Completed。

use std::sync::atomic::{AtomicU32, AtomicU8, Ordering};

use crate::utils::run_log::RunLog;

const STATUS_NOT_STARTED: u8 = 0;
const STATUS_RUNNING: u8 = 1;
const STATUS_COMPLETED: u8 = 2;

/// 运行状态机的三个状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// 进程启动后还没有触发过运行
    NotStarted,
    /// 后台工作线程正在驱动浏览器
    Running,
    /// 最近一次运行已结束（无论成败）
    Completed,
}

impl RunStatus {
    fn from_u8(value: u8) -> Self {
        match value {
            STATUS_RUNNING => RunStatus::Running,
            STATUS_COMPLETED => RunStatus::Completed,
            _ => RunStatus::NotStarted,
        }
    }
}

/// 全局运行状态
///
/// 控制页面只通过读访问器和 try_start 这一个修改入口接触它
pub struct RunState {
    status: AtomicU8,
    accepted: AtomicU32,
    log: RunLog,
}

impl RunState {
    pub fn new() -> Self {
        Self {
            status: AtomicU8::new(STATUS_NOT_STARTED),
            accepted: AtomicU32::new(0),
            log: RunLog::new(),
        }
    }

    /// 当前状态
    pub fn status(&self) -> RunStatus {
        RunStatus::from_u8(self.status.load(Ordering::SeqCst))
    }

    /// 最近一次运行实际接受的数量
    pub fn accepted(&self) -> u32 {
        self.accepted.load(Ordering::SeqCst)
    }

    /// 本次运行的日志缓冲
    pub fn log(&self) -> &RunLog {
        &self.log
    }

    /// 尝试开始一次新的运行
    ///
    /// 成功时清空日志缓冲与计数并返回 true；
    /// 已有运行在进行（或者刚好被别的触发抢先）时返回 false，什么都不改
    pub fn try_start(&self) -> bool {
        let current = self.status.load(Ordering::SeqCst);
        if current == STATUS_RUNNING {
            return false;
        }
        if self
            .status
            .compare_exchange(current, STATUS_RUNNING, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return false;
        }

        self.accepted.store(0, Ordering::SeqCst);
        self.log.clear();
        true
    }

    /// 结束当前运行，记录实际接受数量
    pub fn finish(&self, accepted: u32) {
        self.accepted.store(accepted, Ordering::SeqCst);
        self.status.store(STATUS_COMPLETED, Ordering::SeqCst);
    }
}

impl Default for RunState {
    fn default() -> Self {
        Self::new()
    }
}
