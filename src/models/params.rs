//! 运行参数
//!
//! 网页表单的输入一律按原始字符串接收：非数字或小于 1 的值回退到默认值，
//! 绝不拒绝触发请求；校验后如果最小延迟大于最大延迟，交换两者。

use serde::Deserialize;

use crate::config::Config;
use crate::utils::run_log::RunLog;

/// 网页表单的原始输入
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RunForm {
    #[serde(default)]
    pub max_requests: String,
    #[serde(default)]
    pub delay_min: String,
    #[serde(default)]
    pub delay_max: String,
}

/// 校验后的运行参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunParameters {
    /// 最多接受多少条关注请求
    pub max_accepts: u32,
    /// 最小延迟（秒）
    pub delay_min_secs: u64,
    /// 最大延迟（秒）
    pub delay_max_secs: u64,
}

impl RunParameters {
    /// 从表单输入构建参数，校验过程写进运行日志
    pub fn from_form(form: &RunForm, config: &Config, log: &RunLog) -> Self {
        let max_accepts = match parse_positive::<u32>(&form.max_requests) {
            Some(value) => {
                log.info(format!("Max requests to accept set to: {}", value));
                value
            }
            None => {
                log.info(format!(
                    "Invalid input for max_requests. Using default value: {}",
                    config.default_max_accepts
                ));
                config.default_max_accepts
            }
        };

        let delay_min = match parse_positive::<u64>(&form.delay_min) {
            Some(value) => {
                log.info(format!("Minimum delay time set to: {} seconds", value));
                value
            }
            None => {
                log.info(format!(
                    "Invalid input for delay_min. Using default value: {}",
                    config.default_delay_min_secs
                ));
                config.default_delay_min_secs
            }
        };

        let delay_max = match parse_positive::<u64>(&form.delay_max) {
            Some(value) => {
                log.info(format!("Maximum delay time set to: {} seconds", value));
                value
            }
            None => {
                log.info(format!(
                    "Invalid input for delay_max. Using default value: {}",
                    config.default_delay_max_secs
                ));
                config.default_delay_max_secs
            }
        };

        let (delay_min_secs, delay_max_secs) = if delay_min > delay_max {
            log.warn(format!(
                "Minimum delay ({}) is greater than maximum delay ({}). Swapping values.",
                delay_min, delay_max
            ));
            (delay_max, delay_min)
        } else {
            (delay_min, delay_max)
        };

        Self {
            max_accepts,
            delay_min_secs,
            delay_max_secs,
        }
    }
}

/// 解析正整数输入，非数字或小于 1 时返回 None
fn parse_positive<T>(raw: &str) -> Option<T>
where
    T: std::str::FromStr + PartialOrd + From<u8>,
{
    match raw.trim().parse::<T>() {
        Ok(value) if value >= T::from(1u8) => Some(value),
        _ => None,
    }
}
