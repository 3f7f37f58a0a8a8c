//! 应用装配

use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::models::RunState;
use crate::web::{self, AppState};

/// 应用主结构
pub struct App {
    listener: TcpListener,
    router: Router,
}

impl App {
    /// 初始化应用：构建共享状态并绑定监听地址
    pub async fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let state = Arc::new(AppState {
            run_state: Arc::new(RunState::new()),
            config: config.clone(),
        });
        let router = web::router(state);

        let listener = TcpListener::bind(&config.bind_addr).await?;
        info!("🌐 控制页面: http://{}", config.bind_addr);

        Ok(Self { listener, router })
    }

    /// 运行 HTTP 服务，直到进程退出
    pub async fn run(self) -> Result<()> {
        axum::serve(self.listener, self.router).await?;
        Ok(())
    }
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - Threads 关注请求自动接受");
    info!("🔗 登录检测地址: {}", config.home_url);
    info!("📄 关注请求页: {}", config.requests_url);
    info!("{}", "=".repeat(60));
}
