use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

#[cfg(target_arch = "wasm32")]
fn get_global_value(global: &str, key_primary: &str, key_fallback: &str) -> Option<String> {
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    let val = js_sys::Reflect::get(&obj, &key_primary.into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .or_else(|| js_sys::Reflect::get(&obj, &key_fallback.into()).ok());
    val.and_then(|v| v.as_string())
}

// Deploys can inject either window.__WORKHUB_ENV (env.js) or
// window.__WORKHUB_CONFIG (written back after fetching config.json).
#[cfg(target_arch = "wasm32")]
fn snapshot_from_globals() -> Option<String> {
    get_global_value("__WORKHUB_ENV", "API_BASE_URL", "api_base_url")
        .or_else(|| get_global_value("__WORKHUB_CONFIG", "api_base_url", "API_BASE_URL"))
}

#[cfg(not(target_arch = "wasm32"))]
fn snapshot_from_globals() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
fn write_window_config(cfg: &RuntimeConfig) {
    let url = match &cfg.api_base_url {
        Some(url) => url,
        None => return,
    };
    let window = match web_sys::window() {
        Some(win) => win,
        None => return,
    };
    let obj = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &obj,
        &"api_base_url".into(),
        &wasm_bindgen::JsValue::from_str(url),
    );
    let _ = js_sys::Reflect::set(&window, &"__WORKHUB_CONFIG".into(), &obj);
}

#[cfg(not(target_arch = "wasm32"))]
fn write_window_config(_cfg: &RuntimeConfig) {}

fn cache_base_url(value: &str) -> String {
    let value = value.to_string();
    let _ = API_BASE_URL.set(value.clone());
    value
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let resp = reqwest::get("./config.json").await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    if let Some(cfg) = fetch_runtime_config().await {
        write_window_config(&cfg);
        if let Some(url) = cfg.api_base_url {
            return cache_base_url(&url);
        }
    }
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let _ = await_api_base_url().await;
}
