//! Axum route handlers for static wellness content.

use axum::{extract::Path, Json};
use chrono::Utc;
use serde::Serialize;

use crate::content::catalog::{
    find_topic, insight_for, WellnessTopic, HEALTH_ADVICE, MENTAL_PEACE,
};
use crate::errors::AppError;

#[derive(Debug, Serialize)]
pub struct DailyInsightResponse {
    pub date: String,
    pub insight: &'static str,
}

/// GET /api/v1/content/health-advice
pub async fn handle_health_advice() -> Json<&'static [WellnessTopic]> {
    Json(HEALTH_ADVICE)
}

/// GET /api/v1/content/health-advice/:id
pub async fn handle_health_advice_topic(
    Path(id): Path<String>,
) -> Result<Json<WellnessTopic>, AppError> {
    topic_or_404(HEALTH_ADVICE, &id)
}

/// GET /api/v1/content/mental-peace
pub async fn handle_mental_peace() -> Json<&'static [WellnessTopic]> {
    Json(MENTAL_PEACE)
}

/// GET /api/v1/content/mental-peace/:id
pub async fn handle_mental_peace_topic(
    Path(id): Path<String>,
) -> Result<Json<WellnessTopic>, AppError> {
    topic_or_404(MENTAL_PEACE, &id)
}

/// GET /api/v1/content/daily-insight
pub async fn handle_daily_insight() -> Json<DailyInsightResponse> {
    let today = Utc::now().date_naive();
    Json(DailyInsightResponse {
        date: today.to_string(),
        insight: insight_for(today),
    })
}

fn topic_or_404(topics: &[WellnessTopic], id: &str) -> Result<Json<WellnessTopic>, AppError> {
    find_topic(topics, id)
        .copied()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Topic '{id}' not found")))
}
