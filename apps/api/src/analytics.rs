//! Dashboard analytics. Store sizes blended with fixed headline numbers; there
//! is no aggregation pipeline behind this.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::models::campaign::CampaignStatus;
use crate::state::AppState;

const TOTAL_FOLLOWERS: u64 = 15_420;
const WEEKLY_GROWTH_PCT: f64 = 8.5;
const TIME_SAVED_HOURS: u32 = 28;
const ENGAGEMENT_RATE_PCT: f64 = 6.3;
const VIRAL_POSTS: u32 = 3;

#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub total_followers: u64,
    pub weekly_growth: f64,
    pub content_generated: usize,
    pub alumni_contacted: usize,
    pub ad_campaigns_active: usize,
    pub time_saved: u32,
    pub engagement_rate: f64,
    pub viral_posts: u32,
}

pub async fn dashboard_stats(state: &AppState) -> DashboardStats {
    DashboardStats {
        total_followers: TOTAL_FOLLOWERS,
        weekly_growth: WEEKLY_GROWTH_PCT,
        content_generated: state.posts.count().await,
        alumni_contacted: state.alumni.count().await,
        ad_campaigns_active: state
            .campaigns
            .count_where(|c| c.status == CampaignStatus::Active)
            .await,
        time_saved: TIME_SAVED_HOURS,
        engagement_rate: ENGAGEMENT_RATE_PCT,
        viral_posts: VIRAL_POSTS,
    }
}

/// GET /api/analytics/dashboard
pub async fn handle_dashboard(State(state): State<AppState>) -> Json<DashboardStats> {
    Json(dashboard_stats(&state).await)
}
