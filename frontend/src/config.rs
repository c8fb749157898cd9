use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

fn read_global_string(global: &str, keys: [&str; 2]) -> Option<String> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter()
        .filter_map(|key| js_sys::Reflect::get(&obj, &(*key).into()).ok())
        .find(|v| !v.is_undefined() && !v.is_null())
        .and_then(|v| v.as_string())
}

// window.__ADMINPORTAL_ENV = { API_BASE_URL: "..." } (env.js)
fn get_from_env_js() -> Option<String> {
    read_global_string("__ADMINPORTAL_ENV", ["API_BASE_URL", "api_base_url"])
}

// window.__ADMINPORTAL_CONFIG = { api_base_url: "..." }
fn get_from_window_config() -> Option<String> {
    read_global_string("__ADMINPORTAL_CONFIG", ["api_base_url", "API_BASE_URL"])
}

fn write_window_config(cfg: &RuntimeConfig) {
    let Some(url) = &cfg.api_base_url else {
        return;
    };
    let Some(w) = web_sys::window() else {
        return;
    };
    let obj = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &obj,
        &"api_base_url".into(),
        &wasm_bindgen::JsValue::from_str(url),
    );
    let _ = js_sys::Reflect::set(&w, &"__ADMINPORTAL_CONFIG".into(), &obj);
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let origin = web_sys::window()?.location().origin().ok()?;
    let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
    if !resp.status().is_success() {
        log::warn!("config.json returned {}", resp.status());
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

/// Trims whitespace and trailing slashes; blank values count as unset.
pub fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn first_usable<I>(candidates: I) -> Option<String>
where
    I: IntoIterator<Item = Option<String>>,
{
    candidates
        .into_iter()
        .flatten()
        .find_map(|candidate| normalize_base_url(&candidate))
}

fn pick_base_url<I>(candidates: I) -> String
where
    I: IntoIterator<Item = Option<String>>,
{
    first_usable(candidates).unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

fn cache_base_url(value: String) -> String {
    API_BASE_URL.get_or_init(|| value).clone()
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(from_globals) = first_usable([get_from_env_js(), get_from_window_config()]) {
        return cache_base_url(from_globals);
    }
    let file_url = match fetch_runtime_config().await {
        Some(cfg) => {
            write_window_config(&cfg);
            cfg.api_base_url
        }
        None => None,
    };
    let resolved = pick_base_url([file_url]);
    log::info!("Using API base URL {}", resolved);
    cache_base_url(resolved)
}

pub async fn init() {
    let _ = await_api_base_url().await;
}
