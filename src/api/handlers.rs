//! HTTP request handlers for the salary engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_payroll, compute_exchange, compute_severance, estimate_severance_by_tenure,
};
use crate::display::{
    render_breakdown, render_exchange, render_severance, render_severance_estimate,
};
use crate::error::{EngineError, EngineResult};

use super::request::{ExchangeRequest, SalaryRequest, SeveranceEstimateRequest, SeveranceRequest};
use super::response::{
    ApiError, ApiErrorResponse, CalculationResponse, ExchangeResponse, SalaryResponse,
    SeveranceEstimateResponse, SeveranceResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/salary", post(salary_handler))
        .route("/severance", post(severance_handler))
        .route("/severance/estimate", post(severance_estimate_handler))
        .route("/exchange", post(exchange_handler))
        .with_state(state)
}

/// Handler for POST /salary.
///
/// Computes gross pay, deductions and net pay and attaches a localized
/// rendering of the result.
async fn salary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SalaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing salary request");

    let request = match parse_body(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    match perform_salary_calculation(&state, &request) {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                total_deductions = %response.result.deductions.total(),
                gross_income = %response.result.breakdown.gross_income,
                net_income = %response.result.net.net_income,
                warnings = response.result.audit_trace.warnings.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Salary calculation completed successfully"
            );
            json_response(StatusCode::OK, response)
        }
        Err(err) => failure_response(err, correlation_id, "Salary calculation failed"),
    }
}

fn perform_salary_calculation(
    state: &AppState,
    request: &SalaryRequest,
) -> EngineResult<SalaryResponse> {
    let constants = state.wage_constants(request.effective_date)?;
    let model = request
        .deduction_model
        .unwrap_or(*state.config().deduction_model());

    let result = calculate_payroll(&request.hours, &constants, &model)?;
    let display = render_breakdown(&result, request.locale.unwrap_or_default());

    Ok(SalaryResponse { result, display })
}

/// Handler for POST /severance.
async fn severance_handler(payload: Result<Json<SeveranceRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing severance request");

    let request = match parse_body(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match perform_severance_calculation(&request) {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                total_days = response.result.total_days,
                severance_pay = %response.result.severance_pay,
                "Severance calculation completed successfully"
            );
            json_response(StatusCode::OK, response)
        }
        Err(err) => failure_response(err, correlation_id, "Severance calculation failed"),
    }
}

fn perform_severance_calculation(request: &SeveranceRequest) -> EngineResult<SeveranceResponse> {
    let result = compute_severance(&request.into())?;
    let display = render_severance(&result, request.locale.unwrap_or_default());

    Ok(CalculationResponse { result, display })
}

/// Handler for POST /severance/estimate.
async fn severance_estimate_handler(
    State(state): State<AppState>,
    payload: Result<Json<SeveranceEstimateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing severance estimate request");

    let request = match parse_body(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match perform_severance_estimate(&state, &request) {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                years_worked = %response.result.years_worked,
                estimated_pay = %response.result.estimated_pay,
                "Severance estimate completed successfully"
            );
            json_response(StatusCode::OK, response)
        }
        Err(err) => failure_response(err, correlation_id, "Severance estimate failed"),
    }
}

fn perform_severance_estimate(
    state: &AppState,
    request: &SeveranceEstimateRequest,
) -> EngineResult<SeveranceEstimateResponse> {
    let constants = state.wage_constants(request.effective_date)?;
    let result =
        estimate_severance_by_tenure(request.gross_income, request.years_worked, &constants)?;
    let display = render_severance_estimate(&result, request.locale.unwrap_or_default());

    Ok(CalculationResponse { result, display })
}

/// Handler for POST /exchange.
async fn exchange_handler(
    State(state): State<AppState>,
    payload: Result<Json<ExchangeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing exchange request");

    let request = match parse_body(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match perform_exchange(&state, &request) {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                amount_krw = %response.result.amount_krw,
                "Exchange conversion completed successfully"
            );
            json_response(StatusCode::OK, response)
        }
        Err(err) => failure_response(err, correlation_id, "Exchange conversion failed"),
    }
}

fn perform_exchange(
    state: &AppState,
    request: &ExchangeRequest,
) -> EngineResult<ExchangeResponse> {
    let constants = state.wage_constants(request.effective_date)?;
    let result = compute_exchange(request.amount_krw, &constants)?;
    let display = render_exchange(&result, request.locale.unwrap_or_default());

    Ok(CalculationResponse { result, display })
}

/// Unwraps a JSON body or builds the 400 response for a rejected one.
fn parse_body<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, Response> {
    let rejection = match payload {
        Ok(Json(request)) => return Ok(request),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    Err(json_response(StatusCode::BAD_REQUEST, error))
}

fn failure_response(err: EngineError, correlation_id: Uuid, context: &str) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "{}", context
    );
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
