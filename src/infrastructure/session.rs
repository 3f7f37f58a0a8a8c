//! 页面会话 - 基础设施层
//!
//! 持有唯一的 page 资源，只暴露能力

use async_trait::async_trait;
use chromiumoxide::Page;
use serde_json::Value as JsonValue;

use crate::error::{AppError, AppResult};

/// 页面会话能力
///
/// 职责：
/// - 导航、读取当前地址、刷新
/// - 按精确文本定位确认按钮并滚动 / 点击
/// - 不认识运行参数
/// - 不处理业务流程
#[async_trait]
pub trait PageSession: Send + Sync {
    /// 导航到指定地址
    async fn goto(&self, url: &str) -> AppResult<()>;

    /// 读取当前页面地址
    async fn current_url(&self) -> AppResult<String>;

    /// 刷新当前页面
    async fn reload(&self) -> AppResult<()>;

    /// 统计文本与 label 完全一致的确认按钮数量
    async fn count_buttons(&self, label: &str) -> AppResult<usize>;

    /// 把第 index 个确认按钮滚动到可视区域
    async fn scroll_button_into_view(&self, label: &str, index: usize) -> AppResult<()>;

    /// 点击第 index 个确认按钮
    async fn click_button(&self, label: &str, index: usize) -> AppResult<()>;
}

/// 基于 CDP 的页面会话
///
/// 唯一的 Page owner，所有元素操作都通过执行 JS 完成。
/// Threads 的确认控件是文本完全匹配的 div，这里沿用
/// `//div[normalize-space(text())='…']` 这条 XPath 定位。
pub struct CdpSession {
    page: Page,
}

impl CdpSession {
    /// 创建新的页面会话
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    /// 获取 page 的引用（用于其他操作）
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// 执行 JS 代码并返回 JSON 结果
    async fn eval(&self, js_code: String) -> AppResult<JsonValue> {
        let result = self.page.evaluate(js_code).await?;
        let json_value = result.into_value()?;
        Ok(json_value)
    }
}

#[async_trait]
impl PageSession for CdpSession {
    async fn goto(&self, url: &str) -> AppResult<()> {
        self.page.goto(url).await?;
        Ok(())
    }

    async fn current_url(&self) -> AppResult<String> {
        Ok(self.page.url().await?.unwrap_or_default())
    }

    async fn reload(&self) -> AppResult<()> {
        self.page.reload().await?;
        Ok(())
    }

    async fn count_buttons(&self, label: &str) -> AppResult<usize> {
        let js_code = snapshot_script(label, "return snap.snapshotLength;");
        let value = self
            .eval(js_code)
            .await
            .map_err(AppError::scan_failure)?;
        Ok(value.as_u64().unwrap_or(0) as usize)
    }

    async fn scroll_button_into_view(&self, label: &str, index: usize) -> AppResult<()> {
        let body = format!(
            "const el = snap.snapshotItem({});\n    if (!el) return false;\n    el.scrollIntoView(true);\n    return true;",
            index
        );
        match self.eval(snapshot_script(label, &body)).await {
            Ok(JsonValue::Bool(true)) => Ok(()),
            Ok(_) => Err(AppError::click_failure(index, "确认按钮已不在页面上")),
            Err(e) => Err(AppError::click_failure(index, e)),
        }
    }

    async fn click_button(&self, label: &str, index: usize) -> AppResult<()> {
        let body = format!(
            "const el = snap.snapshotItem({});\n    if (!el) return false;\n    el.click();\n    return true;",
            index
        );
        match self.eval(snapshot_script(label, &body)).await {
            Ok(JsonValue::Bool(true)) => Ok(()),
            Ok(_) => Err(AppError::click_failure(index, "确认按钮已不在页面上")),
            Err(e) => Err(AppError::click_failure(index, e)),
        }
    }
}

/// 生成按精确文本匹配确认按钮的 JS 片段
///
/// label 通过 JSON 编码注入，body 里可以使用 `snap` 快照
fn snapshot_script(label: &str, body: &str) -> String {
    format!(
        r#"(() => {{
    const label = {label};
    const xpath = "//div[normalize-space(text())='" + label + "']";
    const snap = document.evaluate(xpath, document, null, XPathResult.ORDERED_NODE_SNAPSHOT_TYPE, null);
    {body}
}})()"#,
        label = JsonValue::String(label.to_string()),
        body = body
    )
}
