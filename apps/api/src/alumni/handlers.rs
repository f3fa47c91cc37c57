//! Axum route handlers for the Alumni API.

use std::collections::BTreeMap;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::alumni::campaign::start_campaign;
use crate::errors::AppError;
use crate::models::alumni::{AlumniContact, AlumniStatus};
use crate::state::AppState;

const ALL_STATUSES: [AlumniStatus; 4] = [
    AlumniStatus::Pending,
    AlumniStatus::ConnectionSent,
    AlumniStatus::FollowSent,
    AlumniStatus::StorySent,
];

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub success: bool,
    pub imported: usize,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct AlumniListResponse {
    pub alumni: Vec<AlumniContact>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StartCampaignRequest {
    pub campaign_type: Option<String>,
    pub alumni_ids: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct StartCampaignResponse {
    pub success: bool,
    pub campaign_type: Option<String>,
    pub contacts_processed: usize,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: AlumniStatus,
}

#[derive(Debug, Serialize)]
pub struct UpdateStatusResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct AlumniStatsResponse {
    pub total: usize,
    pub by_status: BTreeMap<&'static str, usize>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/alumni/import
///
/// Any request body is ignored; contacts come from the configured data source.
pub async fn handle_import(
    State(state): State<AppState>,
) -> Result<Json<ImportResponse>, AppError> {
    let seeds = state.data_source.import_alumni().await?;
    let contacts = seeds.into_iter().map(AlumniContact::from).collect();
    let imported = state.alumni.append_batch(contacts).await.len();
    info!("Imported {imported} alumni contacts");

    Ok(Json(ImportResponse {
        success: true,
        imported,
        message: format!("Imported {imported} alumni contacts"),
    }))
}

/// GET /api/alumni
pub async fn handle_list_alumni(State(state): State<AppState>) -> Json<AlumniListResponse> {
    Json(AlumniListResponse {
        alumni: state.alumni.list_all().await,
    })
}

/// POST /api/alumni/campaign/start
pub async fn handle_start_campaign(
    State(state): State<AppState>,
    payload: Result<Json<StartCampaignRequest>, JsonRejection>,
) -> Result<Json<StartCampaignResponse>, AppError> {
    let Json(request) = payload?;
    let campaign_type = request.campaign_type;

    let contacts_processed =
        start_campaign(&state.alumni, campaign_type.as_deref(), &request.alumni_ids).await;

    Ok(Json(StartCampaignResponse {
        success: true,
        message: format!(
            "Started {} campaign for {contacts_processed} contacts",
            campaign_type.as_deref().unwrap_or("unknown")
        ),
        campaign_type,
        contacts_processed,
    }))
}

/// PUT /api/alumni/:id/status
///
/// Unknown ids are a silent no-op, matching the other update endpoints.
pub async fn handle_update_status(
    State(state): State<AppState>,
    Path(alumni_id): Path<String>,
    payload: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> Result<Json<UpdateStatusResponse>, AppError> {
    let Json(request) = payload?;
    state
        .alumni
        .find_and_update(&alumni_id, |contact| contact.status = request.status)
        .await;

    Ok(Json(UpdateStatusResponse {
        success: true,
        message: format!("Alumni {alumni_id} status set to {}", request.status.as_str()),
    }))
}

/// GET /api/alumni/stats
pub async fn handle_alumni_stats(State(state): State<AppState>) -> Json<AlumniStatsResponse> {
    let contacts = state.alumni.list_all().await;
    let by_status = ALL_STATUSES
        .iter()
        .map(|status| {
            let count = contacts.iter().filter(|c| c.status == *status).count();
            (status.as_str(), count)
        })
        .collect();

    Json(AlumniStatsResponse {
        total: contacts.len(),
        by_status,
    })
}
