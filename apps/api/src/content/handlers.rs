//! Axum route handlers for the Content API.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::content::composer::generate;
use crate::errors::AppError;
use crate::models::post::{ContentPost, PostStatus};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Missing fields compose as empty strings rather than failing.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GenerateContentRequest {
    pub topic: String,
    pub audience: String,
    pub tone: String,
    // Accepted for client compatibility; not used by the template composer.
    #[allow(dead_code)]
    pub competitor_data: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateContentResponse {
    pub success: bool,
    pub posts: Vec<ContentPost>,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct PostListResponse {
    pub posts: Vec<ContentPost>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ScheduleRequest {
    pub post_id: Option<String>,
    pub scheduled_date: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdatePostRequest {
    pub content: Option<String>,
    pub status: Option<PostStatus>,
    pub scheduled_date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AckResponse {
    pub success: bool,
    pub message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/content/generate
///
/// Waits for the configured generation delay, then composes three draft
/// variations and stores them.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateContentRequest>, JsonRejection>,
) -> Result<Json<GenerateContentResponse>, AppError> {
    let Json(request) = payload?;

    tokio::time::sleep(state.config.generation_delay).await;

    let posts = generate(
        &state.posts,
        &request.topic,
        &request.audience,
        &request.tone,
    )
    .await;

    Ok(Json(GenerateContentResponse {
        success: true,
        message: format!("Generated {} content variations", posts.len()),
        posts,
    }))
}

/// GET /api/content/posts
pub async fn handle_list_posts(State(state): State<AppState>) -> Json<PostListResponse> {
    Json(PostListResponse {
        posts: state.posts.list_all().await,
    })
}

/// POST /api/content/schedule
///
/// Marks the post scheduled. An unknown or missing `post_id` still reports success.
pub async fn handle_schedule(
    State(state): State<AppState>,
    payload: Result<Json<ScheduleRequest>, JsonRejection>,
) -> Result<Json<AckResponse>, AppError> {
    let Json(request) = payload?;

    if let Some(post_id) = request.post_id.as_deref() {
        let scheduled_date = request.scheduled_date.clone();
        let found = state
            .posts
            .find_and_update(post_id, |post| post.schedule(scheduled_date))
            .await;
        if found {
            info!("Scheduled {post_id} for {:?}", request.scheduled_date);
        }
    }

    Ok(Json(AckResponse {
        success: true,
        message: "Post scheduled successfully".to_string(),
    }))
}

/// PUT /api/content/posts/:id
///
/// Overwrites whichever fields are present. Unknown ids are a silent no-op.
pub async fn handle_update_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    payload: Result<Json<UpdatePostRequest>, JsonRejection>,
) -> Result<Json<AckResponse>, AppError> {
    let Json(request) = payload?;

    state
        .posts
        .find_and_update(&post_id, |post| {
            if let Some(content) = request.content {
                post.content = content;
            }
            if let Some(status) = request.status {
                post.status = status;
            }
            if request.scheduled_date.is_some() {
                post.scheduled_date = request.scheduled_date;
            }
        })
        .await;

    Ok(Json(AckResponse {
        success: true,
        message: "Post updated successfully".to_string(),
    }))
}
