//! 运行日志缓冲
//!
//! 网页端可读取的内存日志，每条带时间戳和级别，同时转发到 tracing 控制台输出。
//! 每次新运行开始时由 RunState 清空。

use std::sync::Mutex;

/// 运行日志
///
/// 职责：
/// - 持有一次运行的全部日志行（有序）
/// - 暴露 info / warn / error 三个级别的写入能力
/// - 不认识运行状态，不处理业务流程
pub struct RunLog {
    lines: Mutex<Vec<String>>,
}

impl RunLog {
    /// 创建空的日志缓冲
    pub fn new() -> Self {
        Self {
            lines: Mutex::new(Vec::new()),
        }
    }

    /// 记录一条 INFO 日志
    pub fn info(&self, msg: impl AsRef<str>) {
        let msg = msg.as_ref();
        tracing::info!("{}", msg);
        self.push("INFO", msg);
    }

    /// 记录一条 WARNING 日志
    pub fn warn(&self, msg: impl AsRef<str>) {
        let msg = msg.as_ref();
        tracing::warn!("{}", msg);
        self.push("WARNING", msg);
    }

    /// 记录一条 ERROR 日志
    pub fn error(&self, msg: impl AsRef<str>) {
        let msg = msg.as_ref();
        tracing::error!("{}", msg);
        self.push("ERROR", msg);
    }

    /// 清空缓冲
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// 读取当前全部日志，按写入顺序拼接
    pub fn snapshot(&self) -> String {
        self.lock().join("\n")
    }

    fn push(&self, level: &str, msg: &str) {
        let line = format!(
            "[{}] {}: {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            level,
            msg
        );
        self.lock().push(line);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        // 写日志的线程不会带着锁 panic，锁中毒时直接取回内容继续用
        self.lines.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for RunLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_carry_level_and_order() {
        let log = RunLog::new();
        log.info("first");
        log.warn("second");
        log.error("third");

        let snapshot = log.snapshot();
        let lines: Vec<&str> = snapshot.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("INFO: first"));
        assert!(lines[1].contains("WARNING: second"));
        assert!(lines[2].contains("ERROR: third"));
    }

    #[test]
    fn clear_empties_buffer() {
        let log = RunLog::new();
        log.info("something");
        log.clear();
        assert!(log.snapshot().is_empty());
    }
}
