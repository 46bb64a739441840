//! Route handlers for the dashboard API

use tracing::error;

use super::types::{
    DashboardResponse, LeaderboardResponse, RegisterRequest, RegisterResponse, StatsResponse,
};
use super::{json_content_type, respond_json};
use crate::domain::FundboardError;
use crate::provider::DonationSource;
use crate::service::DashboardService;

/// GET /api/interns/<id>/dashboard
pub fn handle_dashboard<S: DonationSource>(
    service: &DashboardService<S>,
    intern_id: i64,
    request: tiny_http::Request,
) {
    match service.dashboard(intern_id) {
        Ok(sourced) => {
            let response = DashboardResponse::new(sourced.value, sourced.source);
            respond_json(
                request,
                200,
                serde_json::to_value(response)
                    .unwrap_or_else(|_| serde_json::json!({ "error": "serialize" })),
            );
        }
        Err(err) => respond_error(request, err),
    }
}

/// GET /api/interns/<id>/stats
pub fn handle_stats<S: DonationSource>(
    service: &DashboardService<S>,
    intern_id: i64,
    request: tiny_http::Request,
) {
    match service.stats(intern_id) {
        Ok(sourced) => {
            let response = StatsResponse {
                stats: sourced.value,
                source: sourced.source.as_str(),
            };
            respond_json(
                request,
                200,
                serde_json::to_value(response)
                    .unwrap_or_else(|_| serde_json::json!({ "error": "serialize" })),
            );
        }
        Err(err) => respond_error(request, err),
    }
}

/// GET /api/leaderboard
pub fn handle_leaderboard<S: DonationSource>(
    service: &DashboardService<S>,
    request: tiny_http::Request,
) {
    match service.leaderboard() {
        Ok(sourced) => {
            let response = LeaderboardResponse::new(sourced.value, sourced.source);
            respond_json(
                request,
                200,
                serde_json::to_value(response)
                    .unwrap_or_else(|_| serde_json::json!({ "error": "serialize" })),
            );
        }
        Err(err) => respond_error(request, err),
    }
}

/// POST /api/interns
pub fn handle_register<S: DonationSource>(
    service: &DashboardService<S>,
    body: &str,
    request: tiny_http::Request,
) {
    let req: RegisterRequest = match serde_json::from_str(body) {
        Ok(req) => req,
        Err(e) => {
            error!("[fundboard:http] Invalid register JSON: {}", e);
            respond_json(
                request,
                400,
                serde_json::json!({ "error": "invalid_json", "details": e.to_string() }),
            );
            return;
        }
    };

    let name = req.name.trim();
    let email = req.email.trim();
    if name.is_empty() || email.is_empty() {
        respond_json(
            request,
            400,
            serde_json::json!({ "error": "missing_name_or_email" }),
        );
        return;
    }

    match service.register(name, email) {
        Ok(sourced) => {
            let response = RegisterResponse {
                message: "Intern created successfully".to_string(),
                intern: sourced.value.into(),
                source: sourced.source.as_str(),
            };
            respond_json(
                request,
                201,
                serde_json::to_value(response)
                    .unwrap_or_else(|_| serde_json::json!({ "error": "serialize" })),
            );
        }
        Err(err) => respond_error(request, err),
    }
}

/// Map a service error to an HTTP response.
///
/// Fallback-eligible errors never reach here (the service absorbs them),
/// so anything left is the caller's input or a real server fault.
fn respond_error(request: tiny_http::Request, err: FundboardError) {
    let status = match &err {
        FundboardError::InvalidAmount(_) => 400,
        FundboardError::UnknownIntern(_) => 404,
        FundboardError::StoreUnavailable(_) => 500,
    };
    error!("[fundboard:http] Request failed: {}", err);
    respond_json(
        request,
        status,
        serde_json::json!({ "error": err.to_string() }),
    );
}

/// Respond 404 for unmatched routes.
pub fn handle_not_found(request: tiny_http::Request) {
    let response = tiny_http::Response::from_string("{\"error\":\"not_found\"}")
        .with_status_code(404)
        .with_header(json_content_type());
    let _ = request.respond(response);
}
