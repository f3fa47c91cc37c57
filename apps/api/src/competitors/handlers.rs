//! Axum route handlers for the Competitors API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::competitor::Competitor;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AddCompetitorRequest {
    pub name: Option<String>,
    pub linkedin_url: Option<String>,
}

impl AddCompetitorRequest {
    pub fn validate(self) -> Result<(String, String), AppError> {
        let name = self.name.ok_or_else(|| AppError::missing_field("name"))?;
        let linkedin_url = self
            .linkedin_url
            .ok_or_else(|| AppError::missing_field("linkedin_url"))?;
        Ok((name, linkedin_url))
    }
}

#[derive(Debug, Serialize)]
pub struct AddCompetitorResponse {
    pub success: bool,
    pub competitor: Competitor,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct CompetitorListResponse {
    pub competitors: Vec<Competitor>,
}

/// POST /api/competitors
pub async fn handle_add_competitor(
    State(state): State<AppState>,
    payload: Result<Json<AddCompetitorRequest>, JsonRejection>,
) -> Result<Json<AddCompetitorResponse>, AppError> {
    let Json(request) = payload?;
    let (name, linkedin_url) = request.validate()?;

    let snapshot = state
        .data_source
        .competitor_snapshot(&name, &linkedin_url)
        .await?;
    let competitor = state
        .competitors
        .append(Competitor::new(name, linkedin_url, snapshot))
        .await;
    info!("Tracking competitor {} ({})", competitor.id, competitor.name);

    Ok(Json(AddCompetitorResponse {
        success: true,
        competitor,
        message: "Competitor added for tracking".to_string(),
    }))
}

/// GET /api/competitors
pub async fn handle_list_competitors(
    State(state): State<AppState>,
) -> Json<CompetitorListResponse> {
    Json(CompetitorListResponse {
        competitors: state.competitors.list_all().await,
    })
}
