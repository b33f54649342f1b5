// src/handlers/dashboard.rs

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{common::error::AppError, config::AppState};

// GET /api/dashboard/revenue
pub async fn get_revenue(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let revenue = app_state.dashboard_service.fetch_revenue().await?;

    Ok((StatusCode::OK, Json(revenue)))
}

// GET /api/dashboard/latest-invoices
pub async fn get_latest_invoices(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let invoices = app_state.dashboard_service.fetch_latest_invoices().await?;

    Ok((StatusCode::OK, Json(invoices)))
}

// GET /api/dashboard/cards
pub async fn get_card_data(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let cards = app_state.dashboard_service.fetch_card_data().await?;

    Ok((StatusCode::OK, Json(cards)))
}
