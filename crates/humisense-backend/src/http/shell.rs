//! Static presentation shell.
//!
//! One panel: title, caption, and a button with no behavior attached. The page
//! makes no network calls.

use axum::{extract::State, response::Html};

use crate::app_state::AppState;
use crate::config::UiSection;

pub async fn index(State(app): State<AppState>) -> Html<String> {
    Html(render(&app.cfg().ui))
}

pub fn render(ui: &UiSection) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
body {{ margin: 0; min-height: 100vh; display: flex; align-items: center; justify-content: center; background: #0f172a; color: #f1f5f9; font-family: sans-serif; }}
.panel {{ border-radius: 1rem; background: #1e293b; padding: 2rem; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.3); }}
h1 {{ font-size: 1.875rem; font-weight: 700; margin: 0; }}
p {{ margin-top: 0.5rem; color: #cbd5e1; }}
button {{ margin-top: 1.5rem; border: 0; border-radius: 0.75rem; background: #6366f1; color: #2563eb; padding: 0.5rem 1rem; font-weight: 500; }}
button:hover {{ background: #818cf8; }}
</style>
</head>
<body>
<div class="panel">
<h1>{title}</h1>
<p>{caption}</p>
<button type="button">{button}</button>
</div>
</body>
</html>
"#,
        title = escape_html(&ui.title),
        caption = escape_html(&ui.caption),
        button = escape_html(&ui.button_label),
    )
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
