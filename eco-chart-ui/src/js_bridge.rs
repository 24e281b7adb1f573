//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions live in `assets/js/*.js` and are loaded at runtime.
//! They are evaluated as globals (no ES modules) and exposed via `window.*`.
//! This module provides Rust wrappers that serialize data and call those globals.

// Embed the D3 chart JS files at compile time
static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");

/// D3 v7, injected only when the host page has not already loaded it.
const D3_SCRIPT_URL: &str = "https://cdn.jsdelivr.net/npm/d3@7";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('EcoVision JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote a Rust string as a JS string literal.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "''".to_string())
}

/// Initialize chart scripts with a wait-for-D3 polling loop. Call once at startup.
///
/// The chart JS files define functions like `renderClimateLineChart(...)` via
/// `function` declarations. They are evaluated at global scope with an
/// indirect `eval()` once D3 is ready, then promoted to `window.*`.
pub fn init_charts() {
    let all_js = [LINE_CHART_JS, BAR_CHART_JS].join("\n");

    // Store the scripts on window so the polling callback can eval them
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!("window.__ecoChartScripts = {};", js_string(&all_js));
    let _ = js_sys::eval(&store_js);

    let init_js = format!(
        r#"
        (function() {{
            if (typeof d3 === 'undefined' && !document.getElementById('eco-d3-script')) {{
                var script = document.createElement('script');
                script.id = 'eco-d3-script';
                script.src = {d3_url};
                document.head.appendChild(script);
            }}
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    (0, eval)(window.__ecoChartScripts);
                    delete window.__ecoChartScripts;
                    if (typeof renderClimateLineChart !== 'undefined') window.renderClimateLineChart = renderClimateLineChart;
                    if (typeof renderQualityBarChart !== 'undefined') window.renderQualityBarChart = renderQualityBarChart;
                    window.__ecoChartsReady = true;
                    console.log('EcoVision charts initialized');
                }}
            }}, 100);
        }})();
        "#,
        d3_url = js_string(D3_SCRIPT_URL),
    );
    let _ = js_sys::eval(&init_js);
}

/// Polls per render request (100 ms apart) before giving up.
const MAX_RENDER_ATTEMPTS: u32 = 100;

/// Script that polls until D3 is loaded, the chart scripts are initialized
/// and the container exists, then calls `window[function]`. Polling stops
/// after `MAX_RENDER_ATTEMPTS` tries so a missing container or a CDN that
/// never loads does not leave a timer running.
fn render_script(function: &str, container_id: &str, data_json: &str, config_json: &str) -> String {
    let function = js_string(function);
    let container = js_string(container_id);
    let data = js_string(data_json);
    let config = js_string(config_json);
    format!(
        r#"
        (function() {{
            var attempts = 0;
            var poll = setInterval(function() {{
                if (++attempts > {max_attempts}) {{
                    clearInterval(poll);
                    console.warn('[EcoVision] gave up rendering ' + {function} + ' into #' + {container});
                    return;
                }}
                if (window.__ecoChartsReady &&
                    typeof window[{function}] === 'function' &&
                    document.getElementById({container})) {{
                    clearInterval(poll);
                    try {{
                        window[{function}]({container}, {data}, {config});
                    }} catch(e) {{ console.error('[EcoVision] ' + {function} + ' error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
        max_attempts = MAX_RENDER_ATTEMPTS,
    )
}

fn render_when_ready(function: &str, container_id: &str, data_json: &str, config_json: &str) {
    call_js(&render_script(function, container_id, data_json, config_json));
}

/// Render the multi-series line chart (value over time, one line per metric).
pub fn render_line_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderClimateLineChart", container_id, data_json, config_json);
}

/// Render the quality distribution bar chart.
pub fn render_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderQualityBarChart", container_id, data_json, config_json);
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById({}); if (el) el.innerHTML = '';",
        js_string(container_id)
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_script_stops_polling_after_cap() {
        let script = render_script("renderQualityBarChart", "quality-distribution-chart", "[]", "{}");
        assert!(script.contains("if (++attempts > 100)"));
        assert_eq!(script.matches("clearInterval(poll)").count(), 2);
    }

    #[test]
    fn render_script_quotes_arguments() {
        let script = render_script("renderClimateLineChart", "chart's-id", r#"[{"v":1}]"#, "{}");
        assert!(script.contains(r#"document.getElementById("chart's-id")"#));
        assert!(script.contains(r#""[{\"v\":1}]""#));
    }
}
