//! 随机延迟 - 业务能力层

use std::time::Duration;

use rand::Rng;

use crate::utils::run_log::RunLog;

/// 随机延迟生成器
///
/// 在 [min,max] 秒内均匀取值，模拟人工操作的节奏
#[derive(Debug, Clone, Copy)]
pub struct HumanDelay {
    min_secs: u64,
    max_secs: u64,
}

impl HumanDelay {
    /// 创建延迟生成器，调用方保证 min <= max
    pub fn new(min_secs: u64, max_secs: u64) -> Self {
        Self { min_secs, max_secs }
    }

    /// 在 [min,max] 内均匀抽取一个延迟秒数
    pub fn draw(&self) -> f64 {
        rand::thread_rng().gen_range(self.min_secs as f64..=self.max_secs as f64)
    }

    /// 抽取延迟、记一条日志并挂起当前任务
    pub async fn pause(&self, log: &RunLog) {
        let secs = self.draw();
        log.info(format!(
            "Sleeping for {:.2} seconds to mimic human behavior.",
            secs
        ));
        tokio::time::sleep(Duration::from_secs_f64(secs)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_stays_within_bounds() {
        let delay = HumanDelay::new(2, 6);
        for _ in 0..1000 {
            let secs = delay.draw();
            assert!((2.0..=6.0).contains(&secs), "delay {} out of range", secs);
        }
    }

    #[test]
    fn degenerate_range_yields_the_single_value() {
        let delay = HumanDelay::new(3, 3);
        for _ in 0..10 {
            assert_eq!(delay.draw(), 3.0);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn pause_writes_one_log_line() {
        let delay = HumanDelay::new(1, 1);
        let log = RunLog::new();
        delay.pause(&log).await;

        let snapshot = log.snapshot();
        assert_eq!(snapshot.lines().count(), 1);
        assert!(snapshot.contains("Sleeping for 1.00 seconds"));
    }
}
