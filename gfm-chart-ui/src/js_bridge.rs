//! Typed wrappers around plotly.js interop via `js_sys::eval()`.
//!
//! plotly.js is not bundled; `init_plotly` appends a `<script>` tag for the
//! CDN build once, and every render call polls until `window.Plotly` and its
//! container element both exist.

use gfm_figure::PlotlyFigure;

/// plotly.js build loaded at startup.
pub const PLOTLY_CDN_URL: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('GFM JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Inject the plotly.js script tag. Safe to call more than once.
pub fn init_plotly() {
    let src = serde_json::to_string(PLOTLY_CDN_URL).unwrap_or_default();
    call_js(&format!(
        r#"
        if (!window.__gfmPlotlyRequested) {{
            window.__gfmPlotlyRequested = true;
            var script = document.createElement('script');
            script.src = {src};
            script.async = true;
            script.onload = function() {{ console.log('GFM plotly.js loaded'); }};
            document.head.appendChild(script);
        }}
        "#,
    ));
}

/// Build the JS that draws `data`/`layout` into `container_id`.
///
/// At most one poll is pending per container: a newer render replaces the
/// older one, so a CDN that never loads leaves a single interval per chart.
fn render_script(container_id: &str, data: &str, layout: &str) -> String {
    let id = serde_json::to_string(container_id).unwrap_or_default();
    format!(
        r#"
        (function() {{
            var pending = window.__gfmPending = window.__gfmPending || {{}};
            var id = {id};
            if (pending[id]) {{ clearInterval(pending[id]); }}
            pending[id] = setInterval(function() {{
                if (typeof window.Plotly !== 'undefined' &&
                    document.getElementById(id)) {{
                    clearInterval(pending[id]);
                    delete pending[id];
                    try {{
                        window.Plotly.react(id, {data}, {layout}, {{responsive: true}});
                    }} catch(e) {{ console.error('[GFM] Plotly.react error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    )
}

/// Render (or update in place) a plotly figure in the given container.
///
/// `Plotly.react` diffs against whatever is already drawn there, so calling
/// this on every selection change is cheap.
pub fn render_figure(container_id: &str, figure: &PlotlyFigure) {
    call_js(&render_script(
        container_id,
        &figure.data_json(),
        &figure.layout_json(),
    ));
}

/// Remove a chart from its container, cancelling any pending render.
pub fn destroy_chart(container_id: &str) {
    let id = serde_json::to_string(container_id).unwrap_or_default();
    call_js(&format!(
        r#"
        var pending = window.__gfmPending || {{}};
        if (pending[{id}]) {{ clearInterval(pending[{id}]); delete pending[{id}]; }}
        var el = document.getElementById({id});
        if (el) {{ if (window.Plotly) window.Plotly.purge(el); el.innerHTML = ''; }}
        "#,
    ));
}

#[cfg(test)]
mod tests {
    use super::render_script;

    #[test]
    fn test_render_script_replaces_pending_poll_for_container() {
        let js = render_script("example-graph", "[]", "{}");
        assert!(js.contains(r#"var id = "example-graph";"#));
        assert!(js.contains("if (pending[id]) { clearInterval(pending[id]); }"));
        assert!(js.contains("pending[id] = setInterval("));
        assert_eq!(js.matches("setInterval(").count(), 1);
        assert!(js.contains("window.Plotly.react(id, [], {}, {responsive: true});"));
    }

    #[test]
    fn test_render_script_quotes_container_id() {
        let js = render_script("it's", "[]", "{}");
        assert!(js.contains(r#"var id = "it's";"#));
    }
}
