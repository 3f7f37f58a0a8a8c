//! # Threads Follower Accept
//!
//! 一个用于自动接受 Threads 关注请求的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（Page），只暴露能力
//! - `CdpSession` - 唯一的 page owner，提供导航 / 查询 / 点击能力
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"
//! - `HumanDelay` - 随机延迟能力
//! - `LoginWatcher` - 登录检测能力
//! - `Navigator` - 导航确认能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一轮接受"的完整处理流程
//! - `AcceptFlow` - 流程编排（扫描 → 点击 → 刷新）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/run_processor` - 单次运行处理器，管理浏览器资源和状态流转
//!
//! 另有 `web/` 提供本地控制页面，`models/` 存放运行状态与参数。
//! 触发运行之后登录必须由操作者在弹出的浏览器窗口里手动完成。
//!
//! ## 模块结构

pub mod app;
pub mod browser;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod web;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use browser::launch_browser;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::{CdpSession, PageSession};
pub use models::{RunForm, RunParameters, RunState, RunStatus};
pub use orchestrator::RunProcessor;
pub use workflow::AcceptFlow;
