//! HTTP server for the dashboard API
//!
//! Listens on localhost and serves JSON:
//! - GET  /api/ping                   - liveness + version
//! - GET  /api/interns/<id>/dashboard - donation progress, rewards, donations
//! - GET  /api/interns/<id>/stats     - aggregate statistics
//! - GET  /api/leaderboard            - ranked, badge-annotated board
//! - POST /api/interns                - register a new intern (demo)

mod handlers;
mod types;

pub use types::{
    DashboardResponse, DonationView, InternView, LeaderboardResponse, LeaderboardRow,
    RegisterRequest, RegisterResponse, StatsResponse,
};

use std::io::Read;

use anyhow::{Context, Result};
use tiny_http::{Response, Server};
use tracing::{error, info};

use crate::provider::DonationSource;
use crate::service::DashboardService;

const AUTH_HEADER: &str = "X-Fundboard-Token";
const MAX_BODY_BYTES: usize = 64 * 1024; // 64 KiB

/// Run the API server on the current thread until the process exits.
pub fn run_server<S: DonationSource>(
    service: DashboardService<S>,
    port: u16,
    auth_token: Option<String>,
) -> Result<()> {
    let bind_addr = format!("127.0.0.1:{}", port);
    let server = Server::http(&bind_addr)
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("Failed to start server on {}", bind_addr))?;

    let auth_enabled = auth_token.as_deref().is_some_and(|t| !t.trim().is_empty());
    info!(
        "[fundboard:http] Server listening on http://{} (auth: {})",
        bind_addr,
        if auth_enabled { "enabled" } else { "disabled" }
    );

    for mut request in server.incoming_requests() {
        let method = request.method().to_string();
        let url = request.url().to_string();
        let path = url.split('?').next().unwrap_or(url.as_str());

        if !is_authorized(&request, auth_token.as_deref()) {
            let response = Response::from_string("{\"error\":\"unauthorized\"}")
                .with_status_code(401)
                .with_header(json_content_type());
            let _ = request.respond(response);
            continue;
        }

        match (method.as_str(), path) {
            ("GET", "/api/ping") => {
                respond_json(
                    request,
                    200,
                    serde_json::json!({
                        "status": "ok",
                        "version": env!("CARGO_PKG_VERSION"),
                    }),
                );
            }
            ("GET", "/api/leaderboard") => {
                handlers::handle_leaderboard(&service, request);
            }
            ("GET", p) if p.starts_with("/api/interns/") && p.ends_with("/dashboard") => {
                match parse_intern_id_from_path(p, "dashboard") {
                    Ok(id) => handlers::handle_dashboard(&service, id, request),
                    Err(err) => respond_json(request, 400, serde_json::json!({ "error": err })),
                }
            }
            ("GET", p) if p.starts_with("/api/interns/") && p.ends_with("/stats") => {
                match parse_intern_id_from_path(p, "stats") {
                    Ok(id) => handlers::handle_stats(&service, id, request),
                    Err(err) => respond_json(request, 400, serde_json::json!({ "error": err })),
                }
            }
            ("POST", "/api/interns") => {
                let body = match read_request_body(&mut request) {
                    Ok(body) => body,
                    Err(response) => {
                        let _ = request.respond(response);
                        continue;
                    }
                };
                handlers::handle_register(&service, &body, request);
            }
            _ => handlers::handle_not_found(request),
        }
    }

    Ok(())
}

fn is_authorized(request: &tiny_http::Request, expected: Option<&str>) -> bool {
    let Some(expected) = expected.filter(|t| !t.trim().is_empty()) else {
        return true;
    };

    request
        .headers()
        .iter()
        .find(|h| h.field.equiv(AUTH_HEADER))
        .map(|h| h.value.as_str() == expected)
        .unwrap_or(false)
}

fn json_content_type() -> tiny_http::Header {
    tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap()
}

fn read_request_body(
    request: &mut tiny_http::Request,
) -> Result<String, Response<std::io::Cursor<Vec<u8>>>> {
    let mut body = String::new();
    let mut reader = request.as_reader().take((MAX_BODY_BYTES + 1) as u64);
    if let Err(e) = reader.read_to_string(&mut body) {
        error!("[fundboard:http] Failed to read body: {}", e);
        let response = Response::from_string("{\"error\":\"bad_request\"}")
            .with_status_code(400)
            .with_header(json_content_type());
        return Err(response);
    }

    if body.len() > MAX_BODY_BYTES {
        let response = Response::from_string("{\"error\":\"payload_too_large\"}")
            .with_status_code(413)
            .with_header(json_content_type());
        return Err(response);
    }

    Ok(body)
}

fn respond_json(request: tiny_http::Request, status_code: u16, value: serde_json::Value) {
    let body =
        serde_json::to_string(&value).unwrap_or_else(|_| "{\"error\":\"serialize\"}".to_string());
    let response = Response::from_string(body)
        .with_status_code(status_code)
        .with_header(json_content_type());
    let _ = request.respond(response);
}

/// Extract the intern id from `/api/interns/<id>/<suffix>`.
fn parse_intern_id_from_path(path: &str, suffix: &str) -> Result<i64, &'static str> {
    let trimmed = path.trim_end_matches('/');
    let trimmed = trimmed
        .strip_suffix(&format!("/{suffix}"))
        .ok_or("bad_path")?;

    let id_str = trimmed.rsplit('/').next().ok_or("bad_path")?;
    id_str.parse::<i64>().map_err(|_| "bad_intern_id")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_intern_id() {
        assert_eq!(
            parse_intern_id_from_path("/api/interns/7/dashboard", "dashboard"),
            Ok(7)
        );
        assert_eq!(
            parse_intern_id_from_path("/api/interns/123/stats/", "stats"),
            Ok(123)
        );
    }

    #[test]
    fn test_parse_intern_id_rejects_garbage() {
        assert!(parse_intern_id_from_path("/api/interns/abc/dashboard", "dashboard").is_err());
        assert!(parse_intern_id_from_path("/api/leaderboard", "dashboard").is_err());
    }
}
