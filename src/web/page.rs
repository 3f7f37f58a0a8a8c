//! 页面模板
//!
//! 控制页面只有一张，按运行状态渲染三种视图：
//! 未开始（参数表单）、运行中（日志 + 刷新按钮）、已完成（日志 + 返回链接）

use crate::config::Config;
use crate::models::RunStatus;

const PAGE_HEAD: &str = r#"<!doctype html>
<html lang="en">
<head>
    <title>Threads Follower Requests Acceptance</title>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <style>
        body { font-family: Arial, sans-serif; margin: 20px; background-color: #f4f4f4; }
        .container { max-width: 700px; margin: auto; background: #fff; padding: 30px; border-radius: 8px; box-shadow: 0 0 10px rgba(0, 0, 0, 0.1); }
        h1, h2, h3 { text-align: center; color: #333; }
        form { display: flex; flex-direction: column; gap: 15px; }
        label { font-weight: bold; color: #555; }
        input[type="number"] {
            padding: 10px;
            border: 1px solid #ccc;
            border-radius: 4px;
            font-size: 16px;
        }
        button {
            padding: 12px;
            background-color: #007bff;
            border: none;
            border-radius: 4px;
            color: #fff;
            font-size: 16px;
            cursor: pointer;
            transition: background-color 0.3s ease;
        }
        button:hover { background-color: #0056b3; }
        .disclaimer {
            background: #fff3cd;
            padding: 15px;
            border-radius: 4px;
            color: #856404;
            margin-bottom: 25px;
            border: 1px solid #ffeeba;
        }
        pre { background: #f8f9fa; padding: 15px; border-radius: 4px; overflow: auto; max-height: 400px; }
        .logs-container { margin-top: 20px; }
        .footer { text-align: center; margin-top: 30px; color: #888; font-size: 14px; }
        a { color: #007bff; text-decoration: none; }
        a:hover { text-decoration: underline; }
    </style>
</head>
<body>
<div class="container">
    <h1>Threads Follower Requests Acceptance</h1>
    <div class="disclaimer">
        <strong>Disclaimer:</strong> This script may violate Threads' Terms of Service. Use it at your own risk.
    </div>
"#;

/// 渲染控制页面
pub fn render(status: RunStatus, logs: &str, config: &Config) -> String {
    let body = match status {
        RunStatus::NotStarted => form_section(config),
        RunStatus::Running => running_section(logs),
        RunStatus::Completed => completed_section(logs),
    };

    let mut html = String::with_capacity(PAGE_HEAD.len() + body.len() + 256);
    html.push_str(PAGE_HEAD);
    html.push_str(&body);
    html.push_str("</div>\n<div class=\"footer\">\n    Version: ");
    html.push_str(env!("CARGO_PKG_VERSION"));
    html.push_str("\n</div>\n</body>\n</html>\n");
    html
}

fn form_section(config: &Config) -> String {
    format!(
        r#"    <h2>Set Your Parameters</h2>
    <p>When you start the process, a browser will open and take you to the Threads.net login page. Please log in manually.</p>
    <form method="POST" action="/run">
        <label for="max_requests">Max Requests to Accept (Default: {max}):</label>
        <input type="number" name="max_requests" value="{max}" min="1" required>

        <label for="delay_min">Minimum Delay Time in Seconds (Default: {min}):</label>
        <input type="number" name="delay_min" value="{min}" min="1" required>

        <label for="delay_max">Maximum Delay Time in Seconds (Default: {delay_max}):</label>
        <input type="number" name="delay_max" value="{delay_max}" min="1" required>

        <button type="submit">Start Process</button>
    </form>
"#,
        max = config.default_max_accepts,
        min = config.default_delay_min_secs,
        delay_max = config.default_delay_max_secs,
    )
}

fn running_section(logs: &str) -> String {
    format!(
        r#"    <h2>Process is Running...</h2>
    <p>Please log in to Threads.net in the opened browser if you haven't already. Complete any 2FA steps if prompted. Once logged in, the script will proceed automatically.</p>
    <div class="logs-container">
        <form action="/logs">
            <button type="submit">Refresh Logs</button>
        </form>
        <pre>{}</pre>
    </div>
"#,
        escape_html(logs)
    )
}

fn completed_section(logs: &str) -> String {
    format!(
        r#"    <h2>Process Completed!</h2>
    <p>Below are the logs:</p>
    <div class="logs-container">
        <pre>{}</pre>
    </div>
    <a href="/">Back to Home</a>
"#,
        escape_html(logs)
    )
}

/// HTML 转义，日志内容原样展示
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
