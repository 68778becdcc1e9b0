//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions live in `assets/js/*.js` and are embedded at compile
//! time. They are evaluated as globals (no ES modules) and exposed via
//! `window.*`. This module serializes nothing itself; callers pass the JSON
//! payloads built in `lgo-core`.

static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static RANKING_CHART_JS: &str = include_str!("../assets/js/ranking-chart.js");
static TREND_CHART_JS: &str = include_str!("../assets/js/trend-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('LGO JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The scripts are evaluated at global scope via indirect eval once D3 is
/// present, then each function is promoted to `window.*`. Calling this more
/// than once is harmless.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, RANKING_CHART_JS, TREND_CHART_JS].join("\n");

    let store_js = format!(
        "if (!window.__lgoChartsReady && !window.__lgoChartScripts) {{ window.__lgoChartScripts = {}; }}",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__lgoChartsPolling || window.__lgoChartsReady) { return; }
            window.__lgoChartsPolling = true;
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__lgoChartScripts);
                    delete window.__lgoChartScripts;
                    if (typeof renderRankingChart !== 'undefined') window.renderRankingChart = renderRankingChart;
                    if (typeof renderTrendChart !== 'undefined') window.renderTrendChart = renderTrendChart;
                    if (typeof destroyChart !== 'undefined') window.destroyChart = destroyChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__lgoChartsReady = true;
                    console.log('LGO charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Escape a JSON payload for embedding inside a single-quoted JS string.
fn escape_payload(json: &str) -> String {
    json.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "")
}

/// JS expression that advances the container's render generation and
/// evaluates to the new value. A queued render only draws while its
/// generation is still the container's latest.
fn bump_generation(container_id: &str) -> String {
    format!(
        "(function() {{ var g = window.__lgoChartGen = window.__lgoChartGen || {{}}; \
         g['{id}'] = (g['{id}'] || 0) + 1; return g['{id}']; }})()",
        id = container_id
    )
}

/// Poll until D3, the chart scripts and the container all exist, then call
/// `window.<render_fn>(containerId, dataJson, configJson)`. The poll gives up
/// as soon as a later render or a destroy claims the container.
fn render_script(render_fn: &str, container_id: &str, data_json: &str, config_json: &str) -> String {
    let escaped_data = escape_payload(data_json);
    let escaped_config = escape_payload(config_json);
    let bump = bump_generation(container_id);
    format!(
        r#"
        (function() {{
            var gen = {bump};
            var poll = setInterval(function() {{
                if (window.__lgoChartGen['{container_id}'] !== gen) {{
                    clearInterval(poll);
                    return;
                }}
                if (window.__lgoChartsReady &&
                    typeof window.{render_fn} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{render_fn}('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[LGO] {render_fn} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    )
}

fn destroy_script(container_id: &str) -> String {
    format!(
        "{bump}; \
         if (typeof window.destroyChart !== 'undefined') {{ window.destroyChart('{id}'); }} \
         else {{ var el = document.getElementById('{id}'); if (el) el.innerHTML = ''; }}",
        bump = bump_generation(container_id),
        id = container_id
    )
}

/// Render the descending bar chart of geographies.
pub fn render_ranking_chart(container_id: &str, data_json: &str, config_json: &str) {
    call_js(&render_script("renderRankingChart", container_id, data_json, config_json));
}

/// Render the England / region / local authority trend lines.
pub fn render_trend_chart(container_id: &str, data_json: &str, config_json: &str) {
    call_js(&render_script("renderTrendChart", container_id, data_json, config_json));
}

/// Destroy/clean up a chart in the given container. Any render still
/// waiting on D3 for this container is abandoned.
pub fn destroy_chart(container_id: &str) {
    call_js(&destroy_script(container_id));
}
