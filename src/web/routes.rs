//! 控制页面路由
//!
//! 三个入口：
//! - `GET /` 按当前状态渲染表单或日志视图
//! - `POST /run` 触发一次运行（已有运行在进行时拒绝）
//! - `GET /logs` 带最新日志快照重新渲染
//!
//! 处理函数只读状态原子和日志缓冲，从不阻塞在会话状态上；
//! 所有耗时操作都在 tokio::spawn 出去的工作任务里。

use std::sync::Arc;

use axum::extract::{Form, State};
use axum::response::{Html, Redirect};
use axum::routing::{get, post};
use axum::Router;

use crate::config::Config;
use crate::models::{RunForm, RunParameters, RunState};
use crate::orchestrator::RunProcessor;
use crate::web::page;

/// 路由共享状态
pub struct AppState {
    pub config: Config,
    pub run_state: Arc<RunState>,
}

/// 构建控制页面路由
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/run", post(start_run).get(back_home))
        .route("/logs", get(show_logs))
        .with_state(state)
}

/// 首页：不带日志内容渲染（日志通过 /logs 拉取）
async fn home(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(page::render(state.run_state.status(), "", &state.config))
}

/// 日志页：带上最新日志快照重新渲染
async fn show_logs(State(state): State<Arc<AppState>>) -> Html<String> {
    let logs = state.run_state.log().snapshot();
    Html(page::render(state.run_state.status(), &logs, &state.config))
}

/// 触发一次运行
///
/// try_start 抢不到运行权就直接回首页，正在跑的运行不受影响
async fn start_run(
    State(state): State<Arc<AppState>>,
    Form(form): Form<RunForm>,
) -> Redirect {
    if !state.run_state.try_start() {
        state
            .run_state
            .log()
            .info("Process is already running. Please wait until it completes.");
        return Redirect::to("/");
    }

    let params = RunParameters::from_form(&form, &state.config, state.run_state.log());
    let processor = RunProcessor::new(state.config.clone(), state.run_state.clone());

    tokio::spawn(async move {
        processor.run(params).await;
    });

    Redirect::to("/")
}

/// GET /run 不触发任何东西，回到首页
async fn back_home() -> Redirect {
    Redirect::to("/")
}
