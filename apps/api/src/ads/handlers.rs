//! Axum route handlers for the Ads API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::ads::headlines::DEFAULT_TARGET_AUDIENCE;
use crate::errors::AppError;
use crate::models::campaign::AdCampaign;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// All four fields are required; see [`CreateCampaignRequest::into_campaign`].
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateCampaignRequest {
    pub name: Option<String>,
    pub budget: Option<f64>,
    pub target_audience: Option<String>,
    pub headlines: Option<Vec<String>>,
}

impl CreateCampaignRequest {
    /// Checks required fields in declaration order and builds an unsaved campaign.
    pub fn into_campaign(self) -> Result<AdCampaign, AppError> {
        let name = self.name.ok_or_else(|| AppError::missing_field("name"))?;
        let budget = self.budget.ok_or_else(|| AppError::missing_field("budget"))?;
        let target_audience = self
            .target_audience
            .ok_or_else(|| AppError::missing_field("target_audience"))?;
        let headlines = self
            .headlines
            .ok_or_else(|| AppError::missing_field("headlines"))?;
        Ok(AdCampaign::new(name, budget, target_audience, headlines))
    }
}

#[derive(Debug, Serialize)]
pub struct CreateCampaignResponse {
    pub success: bool,
    pub campaign: AdCampaign,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct CampaignListResponse {
    pub campaigns: Vec<AdCampaign>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GenerateHeadlinesRequest {
    pub target_audience: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateHeadlinesResponse {
    pub success: bool,
    pub headlines: Vec<String>,
    pub message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/ads/campaign
pub async fn handle_create_campaign(
    State(state): State<AppState>,
    payload: Result<Json<CreateCampaignRequest>, JsonRejection>,
) -> Result<Json<CreateCampaignResponse>, AppError> {
    let Json(request) = payload?;
    let campaign = state.campaigns.append(request.into_campaign()?).await;
    info!("Created ad campaign {} ({})", campaign.id, campaign.name);

    Ok(Json(CreateCampaignResponse {
        success: true,
        campaign,
        message: "Ad campaign created successfully".to_string(),
    }))
}

/// GET /api/ads/campaigns
pub async fn handle_list_campaigns(State(state): State<AppState>) -> Json<CampaignListResponse> {
    Json(CampaignListResponse {
        campaigns: state.campaigns.list_all().await,
    })
}

/// POST /api/ads/headlines/generate
///
/// Returns headline copy only; nothing is stored.
pub async fn handle_generate_headlines(
    State(state): State<AppState>,
    payload: Result<Json<GenerateHeadlinesRequest>, JsonRejection>,
) -> Result<Json<GenerateHeadlinesResponse>, AppError> {
    let Json(request) = payload?;
    let target_audience = request
        .target_audience
        .unwrap_or_else(|| DEFAULT_TARGET_AUDIENCE.to_string());

    let headlines = state.data_source.ad_headlines(&target_audience).await?;

    Ok(Json(GenerateHeadlinesResponse {
        success: true,
        message: format!(
            "Generated {} headlines for {target_audience}",
            headlines.len()
        ),
        headlines,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::campaign::CampaignStatus;

    #[test]
    fn test_complete_request_builds_active_campaign() {
        let request = CreateCampaignRequest {
            name: Some("Spring push".into()),
            budget: Some(250.0),
            target_audience: Some("students".into()),
            headlines: Some(vec!["Join now".into()]),
        };
        let campaign = request.into_campaign().unwrap();
        assert_eq!(campaign.status, CampaignStatus::Active);
        assert_eq!(campaign.performance.clicks, 0);
        assert_eq!(campaign.headlines, vec!["Join now"]);
    }

    #[test]
    fn test_missing_budget_is_a_validation_error() {
        let request: CreateCampaignRequest = serde_json::from_str(
            r#"{"name": "x", "target_audience": "students", "headlines": []}"#,
        )
        .unwrap();
        match request.into_campaign() {
            Err(AppError::Validation(msg)) => assert_eq!(msg, "missing required field: budget"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_body_reports_first_missing_field() {
        let request: CreateCampaignRequest = serde_json::from_str("{}").unwrap();
        let err = request.into_campaign().unwrap_err();
        assert!(err.to_string().ends_with("missing required field: name"));
    }
}
