//! HTTP host that routes visitors to the right installer.
//!
//! The host is stateless: every request carries its configuration
//! base64-encoded in the `config` query parameter. Payloads are capped before
//! parsing, then the user agent decides the platform and the resolver picks
//! the destination. A visitor with no matching installer and no fallback
//! receives an inline page listing every configured download.

use axum::{
    Router,
    extract::Query,
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get
};
use base64::{Engine as _, engine::general_purpose};
use serde::Deserialize;
use tokio::net::TcpListener;

use crate::{
    config::Config, detect::detect_os, error::Error, parse::parse_config,
    resolve::install_target
};

/// Upper bound on the encoded configuration payload, in bytes.
const MAX_CONFIG_PAYLOAD_BYTES: usize = 8 * 1024;

/// Query parameters accepted by the install route.
#[derive(Debug, Deserialize)]
struct InstallQuery {
    config: Option<String>
}

/// Builds the application router.
pub fn create_app() -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/install", get(install))
}

/// Runs the HTTP host until the process is stopped.
///
/// # Errors
///
/// Returns [`Error::Service`](Error::Service) when the listener cannot be
/// bound or the server loop fails.
pub async fn serve(host: &str, port: u16) -> Result<(), Error> {
    let app = create_app();
    let addr = format!("{host}:{port}");
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| Error::service(format!("failed to bind {addr}: {source}")))?;

    tracing::info!("listening on {addr}");

    axum::serve(listener, app)
        .await
        .map_err(|source| Error::service(format!("server failed: {source}")))
}

/// GET /healthz - liveness probe, returns 200 immediately.
async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// GET /install - resolves the visitor's platform and redirects.
async fn install(Query(query): Query<InstallQuery>, headers: HeaderMap) -> Response {
    let Some(encoded) = query.config else {
        return (StatusCode::BAD_REQUEST, "missing config query parameter").into_response();
    };
    if encoded.len() > MAX_CONFIG_PAYLOAD_BYTES {
        return (
            StatusCode::PAYLOAD_TOO_LARGE,
            "config payload exceeds the 8KiB ceiling"
        )
            .into_response();
    }

    let config = match decode_config(&encoded) {
        Ok(config) => config,
        Err(error) => {
            tracing::debug!("rejected config payload: {error}");
            return (StatusCode::BAD_REQUEST, error.error_lines().join("\n")).into_response();
        }
    };

    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok());
    let platform = detect_os(user_agent);
    let target = install_target(&config, platform);

    tracing::info!(
        name = %config.name,
        platform = %platform,
        available = target.available,
        "resolved install request"
    );

    if let Some(url) = target.url.as_deref() {
        return Redirect::temporary(url).into_response();
    }
    if let Some(fallback) = target.fallback.as_deref() {
        return Redirect::temporary(fallback).into_response();
    }

    Html(build_download_page(&config)).into_response()
}

/// Decodes the base64 query payload and parses it as a configuration.
///
/// Both the standard and the URL-safe unpadded alphabets are accepted so
/// callers can embed the payload without re-encoding.
fn decode_config(encoded: &str) -> Result<Config, Error> {
    let bytes = general_purpose::STANDARD
        .decode(encoded)
        .or_else(|_| general_purpose::URL_SAFE_NO_PAD.decode(encoded))
        .map_err(|source| {
            Error::validation(format!("config parameter is not valid base64: {source}"))
        })?;
    let text = String::from_utf8(bytes)
        .map_err(|_| Error::validation("config parameter is not valid UTF-8"))?;
    parse_config(&text)
}

/// Builds the inline HTML page listing every configured download link.
fn build_download_page(config: &Config) -> String {
    use std::fmt::Write as _;

    let mut page = String::with_capacity(512);
    let _ = write!(
        page,
        "<!DOCTYPE html>\n<html>\n<head><title>Install {}</title></head>\n<body>\n<h1>Install {}</h1>\n<ul>",
        config.name, config.name
    );

    for (platform, url) in &config.installers {
        let _ = write!(
            page,
            "\n  <li><a href=\"{url}\">{}</a></li>",
            platform.display_name()
        );
    }

    page.push_str("\n</ul>\n</body>\n</html>\n");
    page
}
