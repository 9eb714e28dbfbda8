//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js map and table functions live in `assets/js/*.js` and are loaded
//! at runtime. They are evaluated as globals (no ES modules) and exposed via
//! `window.*`. This module serializes data for them and calls them; map
//! clicks come back through a Rust closure registered on `window`.

use wasm_bindgen::prelude::*;

// Embed all chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static STATION_MAP_JS: &str = include_str!("../assets/js/station-map.js");
static DATA_TABLE_JS: &str = include_str!("../assets/js/data-table.js");

/// Global the map script calls with a click payload.
const CLICK_HANDLER_GLOBAL: &str = "__evcOnStationClick";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('EVC JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote a string as a JS string literal.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "''".to_string())
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The scripts define functions like `renderStationMap(...)` via `function`
/// declarations. They are evaluated at global scope once D3 is ready and
/// each function is then promoted to `window.*`. Safe to call repeatedly.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, STATION_MAP_JS, DATA_TABLE_JS].join("\n");

    let store_js = format!(
        "if (!window.__evcChartsReady) {{ window.__evcChartScripts = {}; }}",
        js_string(&all_js)
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__evcChartsReady || window.__evcChartsPolling) return;
            window.__evcChartsPolling = true;
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__evcChartScripts);
                    delete window.__evcChartScripts;
                    if (typeof renderStationMap !== 'undefined') window.renderStationMap = renderStationMap;
                    if (typeof renderDataTable !== 'undefined') window.renderDataTable = renderDataTable;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__evcChartsReady = true;
                    console.log('EVC charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Call `window.<function>(container_id, args...)` once D3, the chart
/// scripts and the container element all exist.
fn render_when_ready(function: &str, container_id: &str, args: &[&str]) {
    let container = js_string(container_id);
    let args: String = args.iter().map(|a| format!(", {}", js_string(a))).collect();
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__evcChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById({container})) {{
                    clearInterval(poll);
                    try {{
                        window.{function}({container}{args});
                    }} catch(e) {{ console.error('[EVC] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render the station scatter map from a serialized `MapFigure`.
pub fn render_station_map(container_id: &str, figure_json: &str) {
    render_when_ready("renderStationMap", container_id, &[figure_json]);
}

/// Render a paged data table.
pub fn render_data_table(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderDataTable", container_id, &[data_json, config_json]);
}

/// Expose `handler` to the map script as the click callback.
///
/// The handler receives the raw click payload JSON. The closure is leaked on
/// purpose: it must outlive every map render for the lifetime of the page.
pub fn register_click_handler<F>(handler: F)
where
    F: FnMut(String) + 'static,
{
    let closure = Closure::<dyn FnMut(String)>::new(handler);
    match web_sys::window() {
        Some(window) => {
            if let Err(e) = js_sys::Reflect::set(
                &window,
                &JsValue::from_str(CLICK_HANDLER_GLOBAL),
                closure.as_ref(),
            ) {
                log::error!("[EVC] failed to register click handler: {:?}", e);
            }
        }
        None => log::error!("[EVC] no window; map clicks will be ignored"),
    }
    closure.forget();
}
