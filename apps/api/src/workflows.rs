//! Workflow catalog. A fixed list of automation workflows; start/stop only
//! acknowledge and never change what the catalog reports.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, Serialize)]
pub struct Workflow {
    pub id: &'static str,
    pub name: &'static str,
    pub status: WorkflowStatus,
    pub description: &'static str,
    pub next_run: Option<DateTime<Utc>>,
}

struct WorkflowDef {
    id: &'static str,
    name: &'static str,
    status: WorkflowStatus,
    description: &'static str,
    /// Offset of the next run from now; `None` for workflows that never run.
    next_run_in: Option<Duration>,
}

fn definitions() -> [WorkflowDef; 5] {
    [
        WorkflowDef {
            id: "content_creation",
            name: "Content Creation",
            status: WorkflowStatus::Active,
            description: "Generate 15-20 posts/week using Langflow + n8n",
            next_run_in: Some(Duration::hours(2)),
        },
        WorkflowDef {
            id: "alumni_engagement",
            name: "Alumni Engagement",
            status: WorkflowStatus::Active,
            description: "Convert 2k alumni → 10k followers",
            next_run_in: Some(Duration::hours(6)),
        },
        WorkflowDef {
            id: "ad_optimization",
            name: "Ad Optimization",
            status: WorkflowStatus::Active,
            description: "Scale ads while keeping CPA < $0.30",
            next_run_in: Some(Duration::hours(1)),
        },
        WorkflowDef {
            id: "competitor_tracking",
            name: "Competitor Tracking",
            status: WorkflowStatus::Active,
            description: "Real-time competitor monitoring",
            next_run_in: Some(Duration::minutes(30)),
        },
        WorkflowDef {
            id: "viral_amplification",
            name: "Viral Amplification",
            status: WorkflowStatus::Inactive,
            description: "Amplify posts with >500 engagement",
            next_run_in: None,
        },
    ]
}

/// The catalog as of `now`.
pub fn catalog(now: DateTime<Utc>) -> Vec<Workflow> {
    definitions()
        .into_iter()
        .map(|d| Workflow {
            id: d.id,
            name: d.name,
            status: d.status,
            description: d.description,
            next_run: d.next_run_in.map(|offset| now + offset),
        })
        .collect()
}

#[derive(Debug, Serialize)]
pub struct WorkflowListResponse {
    pub workflows: Vec<Workflow>,
}

#[derive(Debug, Serialize)]
pub struct WorkflowActionResponse {
    pub success: bool,
    pub workflow_id: String,
    pub status: &'static str,
    pub message: String,
}

/// GET /api/workflows
pub async fn handle_list_workflows(State(_state): State<AppState>) -> Json<WorkflowListResponse> {
    Json(WorkflowListResponse {
        workflows: catalog(Utc::now()),
    })
}

/// GET /api/workflows/:id/status
pub async fn handle_workflow_status(
    State(_state): State<AppState>,
    Path(workflow_id): Path<String>,
) -> Result<Json<Workflow>, AppError> {
    catalog(Utc::now())
        .into_iter()
        .find(|w| w.id == workflow_id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Workflow {workflow_id} not found")))
}

/// POST /api/workflows/:id/start
///
/// Any config body is accepted and ignored.
pub async fn handle_start_workflow(
    State(_state): State<AppState>,
    Path(workflow_id): Path<String>,
) -> Json<WorkflowActionResponse> {
    info!("Workflow {workflow_id} start requested");
    Json(WorkflowActionResponse {
        success: true,
        message: format!("Workflow {workflow_id} started successfully"),
        workflow_id,
        status: "started",
    })
}

/// POST /api/workflows/:id/stop
pub async fn handle_stop_workflow(
    State(_state): State<AppState>,
    Path(workflow_id): Path<String>,
) -> Json<WorkflowActionResponse> {
    info!("Workflow {workflow_id} stop requested");
    Json(WorkflowActionResponse {
        success: true,
        message: format!("Workflow {workflow_id} stopped successfully"),
        workflow_id,
        status: "stopped",
    })
}
