use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use yansi::Paint;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::CatalogError;

static SILENT: AtomicBool = AtomicBool::new(false);

pub fn set_silent(silent: bool) {
    SILENT.store(silent, Ordering::Relaxed);
}

pub(crate) fn log_output(msg: String) {
    if !SILENT.load(Ordering::Relaxed) {
        println!("{}", msg);
    }
}

/// HTTP verbs used against the catalog API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// Core HTTP client function for making API calls.
/// Returns the decoded JSON body on 2xx; no retries.
pub async fn api_call(
    client: &reqwest::Client,
    api_base_url: &str,
    method: Method,
    endpoint: &str,
    body: Option<Value>,
) -> Result<Value, CatalogError> {
    let url = format!("{}{}", api_base_url, endpoint);

    // --- Curl Logging ---
    let mut parts = Vec::new();
    parts.push(Paint::new("curl").fg(yansi::Color::Green).bold().to_string());
    parts.push(format!("-X {}", Paint::new(method.as_str()).fg(yansi::Color::Yellow).bold()));
    parts.push(format!("'{}'", Paint::new(&url).fg(yansi::Color::Cyan)));
    parts.push(format!("{} {}",
        Paint::new("-H").fg(yansi::Color::Magenta),
        Paint::new("'Content-Type: application/json'").fg(yansi::Color::Magenta)
    ));
    if let Some(ref d) = body {
        let json_str = serde_json::to_string_pretty(d).unwrap_or_default();
        let escaped_json = json_str.replace("'", "'\\''");
        parts.push(format!("{} {}",
            Paint::new("-d").fg(yansi::Color::Blue),
            Paint::new(format!("'{}'", escaped_json)).fg(yansi::Color::White)
        ));
    }
    log_output(format!("Request:\n{}", parts.join(" ")));
    // --------------------

    let mut req = match method {
        Method::Get => client.get(&url),
        Method::Post => client.post(&url),
    };
    req = req.header(CONTENT_TYPE, "application/json");
    if let Some(ref b) = body {
        req = req.json(b);
    }

    let resp = req.send().await.map_err(|e| {
        tracing::error!(%url, error = %e, "Request failed");
        CatalogError::Network(e.to_string())
    })?;

    let status = resp.status();
    if !status.is_success() {
        log_output(format!("Response:\n{}", Paint::new(format!("HTTP {}", status)).fg(yansi::Color::Red)));
        tracing::warn!(%url, status = status.as_u16(), "Non-success response");
        return Err(CatalogError::Http { status: status.as_u16() });
    }

    let text = resp.text().await.map_err(|e| CatalogError::Network(e.to_string()))?;
    // Grayed out color (dimmed/dark gray)
    log_output(format!("Response:\n{}", Paint::new(&text).rgb(100, 100, 100)));

    serde_json::from_str(&text).map_err(|e| CatalogError::Decode(e.to_string()))
}

/// `api_call` with a typed request body and typed response.
pub async fn api_call_typed<B, T>(
    client: &reqwest::Client,
    api_base_url: &str,
    method: Method,
    endpoint: &str,
    body: Option<&B>,
) -> Result<T, CatalogError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let body = body
        .map(serde_json::to_value)
        .transpose()
        .map_err(|e| CatalogError::Decode(e.to_string()))?;
    let value = api_call(client, api_base_url, method, endpoint, body).await?;
    serde_json::from_value(value).map_err(|e| CatalogError::Decode(e.to_string()))
}
