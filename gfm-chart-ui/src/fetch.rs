//! Browser-side HTTP via `window.fetch()`.

use gfm_data::{parse_gapminder_csv, CountryRecord};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

fn js_error(value: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", value)
}

/// GET `url` and return the response body as text.
pub async fn fetch_text(url: &str) -> anyhow::Result<String> {
    let window = web_sys::window().ok_or_else(|| anyhow::anyhow!("no global window"))?;
    let response: Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;

    if !response.ok() {
        anyhow::bail!("HTTP {} fetching {}", response.status(), url);
    }

    let body = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    body.as_string()
        .ok_or_else(|| anyhow::anyhow!("response body from {} is not text", url))
}

/// Fetch and parse the gapminder CSV.
pub async fn load_gapminder(url: &str) -> anyhow::Result<Vec<CountryRecord>> {
    let body = fetch_text(url).await?;
    parse_gapminder_csv(&body)
}
