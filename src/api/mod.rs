//! HTTP API module for the EPS salary engine.
//!
//! This module exposes salary, severance and currency conversion endpoints
//! over the calculation core.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ExchangeRequest, SalaryRequest, SeveranceEstimateRequest, SeveranceRequest};
pub use response::{
    ApiError, ApiErrorResponse, CalculationResponse, ExchangeResponse, SalaryResponse,
    SeveranceEstimateResponse, SeveranceResponse,
};
pub use state::AppState;
