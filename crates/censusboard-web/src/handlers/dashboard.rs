//! Dashboard handler — the single page with the overview and drill-down charts.

use axum::{extract::State, response::Html};
use censusboard_common::error::ApiError;
use censusboard_view::DetailView;

use crate::state::SharedState;

const DASHBOARD_CSS: &str = include_str!("../../static/css/dashboard.css");
const DASHBOARD_JS: &str = include_str!("../../static/js/dashboard.js");
const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

pub async fn dashboard(State(state): State<SharedState>) -> Result<Html<String>, ApiError> {
    let detail = state.dashboard.read().await.current_detail()?;
    Ok(Html(render_dashboard(&detail)))
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

fn render_dashboard(detail: &DetailView) -> String {
    // The drill-down row is filled in by the page script; the server only
    // decides whether the institutions section starts visible.
    let institutions_display = if detail.is_empty() { "none" } else { "block" };

    format!(r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Population Distribution in Selected States</title>
    <script src="{}"></script>
    <style>{}</style>
</head>
<body>
<div class="dashboard">
    <h1 class="page-title">Population Distribution in Selected States</h1>

    <div id="state-bar-chart" class="chart"></div>

    <div class="spacer"></div>

    <div class="detail-row">
        <div class="detail-pane detail-pane-left">
            <div id="state-pie-chart" class="chart"></div>
        </div>
        <div class="detail-pane detail-pane-right">
            <div id="institutions-data" style="display: {}">
                <h3 id="institutions-title" class="section-title">{}</h3>
                <div id="state-institution-bar-chart" class="chart"></div>
            </div>
        </div>
    </div>
</div>
<script>{}</script>
</body>
</html>"#,
        PLOTLY_CDN,
        DASHBOARD_CSS,
        institutions_display,
        escape_html(&detail.title),
        DASHBOARD_JS,
    )
}
