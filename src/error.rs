use std::fmt;

/// 应用程序错误类型
#[derive(Debug)]
pub enum AppError {
    /// 等待手动登录超时（对本次运行致命）
    LoginTimeout { waited_secs: u64 },
    /// 页面导航超时（对本次运行致命）
    NavigationTimeout { url: String, waited_secs: u64 },
    /// 单次点击失败（局部恢复：跳过该按钮）
    ClickFailure { index: usize, reason: String },
    /// 页面扫描失败（局部恢复：提前结束接受循环）
    ScanFailure { reason: String },
    /// 浏览器会话错误（用于包装 CDP 错误）
    Session {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::LoginTimeout { waited_secs } => {
                write!(f, "等待手动登录超时 ({}秒)", waited_secs)
            }
            AppError::NavigationTimeout { url, waited_secs } => {
                write!(f, "导航到 {} 超时 ({}秒)", url, waited_secs)
            }
            AppError::ClickFailure { index, reason } => {
                write!(f, "点击第 {} 个确认按钮失败: {}", index + 1, reason)
            }
            AppError::ScanFailure { reason } => {
                write!(f, "扫描确认按钮失败: {}", reason)
            }
            AppError::Session { source } => {
                write!(f, "浏览器会话错误: {}", source)
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Session { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

// ========== 从常见错误类型转换 ==========
// 注意：不需要手动实现 From<AppError> for anyhow::Error，
// 因为 anyhow 已经为所有实现了 std::error::Error 的类型提供了自动实现

impl From<chromiumoxide::error::CdpError> for AppError {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        AppError::Session {
            source: Box::new(err),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Session {
            source: Box::new(err),
        }
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建登录超时错误
    pub fn login_timeout(waited_secs: u64) -> Self {
        AppError::LoginTimeout { waited_secs }
    }

    /// 创建导航超时错误
    pub fn navigation_timeout(url: impl Into<String>, waited_secs: u64) -> Self {
        AppError::NavigationTimeout {
            url: url.into(),
            waited_secs,
        }
    }

    /// 创建点击失败错误
    pub fn click_failure(index: usize, reason: impl ToString) -> Self {
        AppError::ClickFailure {
            index,
            reason: reason.to_string(),
        }
    }

    /// 创建扫描失败错误
    pub fn scan_failure(reason: impl ToString) -> Self {
        AppError::ScanFailure {
            reason: reason.to_string(),
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
