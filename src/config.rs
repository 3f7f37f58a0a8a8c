/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 控制页面监听地址
    pub bind_addr: String,
    /// Threads 登录页地址
    pub login_url: String,
    /// 登录成功后的主页地址（精确相等判断）
    pub home_url: String,
    /// 关注请求页地址
    pub requests_url: String,
    /// 确认按钮的精确文本
    pub confirm_label: String,
    /// 显式等待时间（秒）
    pub explicit_wait_secs: u64,
    /// 地址轮询间隔（毫秒）
    pub url_poll_interval_ms: u64,
    /// 默认接受数量
    pub default_max_accepts: u32,
    /// 默认最小延迟（秒）
    pub default_delay_min_secs: u64,
    /// 默认最大延迟（秒）
    pub default_delay_max_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:5000".to_string(),
            login_url: "https://www.threads.net/login/".to_string(),
            home_url: "https://www.threads.net/".to_string(),
            requests_url: "https://www.threads.net/activity/requests".to_string(),
            confirm_label: "Confirm".to_string(),
            explicit_wait_secs: 90,
            url_poll_interval_ms: 500,
            default_max_accepts: 1,
            default_delay_min_secs: 2,
            default_delay_max_secs: 6,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or(default.bind_addr),
            login_url: std::env::var("LOGIN_URL").unwrap_or(default.login_url),
            home_url: std::env::var("HOME_URL").unwrap_or(default.home_url),
            requests_url: std::env::var("REQUESTS_URL").unwrap_or(default.requests_url),
            confirm_label: std::env::var("CONFIRM_LABEL").unwrap_or(default.confirm_label),
            explicit_wait_secs: std::env::var("EXPLICIT_WAIT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.explicit_wait_secs),
            url_poll_interval_ms: std::env::var("URL_POLL_INTERVAL_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.url_poll_interval_ms),
            default_max_accepts: std::env::var("DEFAULT_MAX_ACCEPTS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.default_max_accepts),
            default_delay_min_secs: std::env::var("DEFAULT_DELAY_MIN_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.default_delay_min_secs),
            default_delay_max_secs: std::env::var("DEFAULT_DELAY_MAX_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.default_delay_max_secs),
        }
    }
}
