pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::state::AppState;
use crate::{ads, alumni, analytics, competitors, content, workflows};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/api/health", get(health::health_handler))
        // Content
        .route(
            "/api/content/generate",
            post(content::handlers::handle_generate),
        )
        .route("/api/content/posts", get(content::handlers::handle_list_posts))
        .route(
            "/api/content/posts/:id",
            put(content::handlers::handle_update_post),
        )
        .route(
            "/api/content/schedule",
            post(content::handlers::handle_schedule),
        )
        // Alumni
        .route("/api/alumni", get(alumni::handlers::handle_list_alumni))
        .route("/api/alumni/import", post(alumni::handlers::handle_import))
        .route("/api/alumni/stats", get(alumni::handlers::handle_alumni_stats))
        .route(
            "/api/alumni/campaign/start",
            post(alumni::handlers::handle_start_campaign),
        )
        .route(
            "/api/alumni/:id/status",
            put(alumni::handlers::handle_update_status),
        )
        // Ads
        .route(
            "/api/ads/campaign",
            post(ads::handlers::handle_create_campaign),
        )
        .route(
            "/api/ads/campaigns",
            get(ads::handlers::handle_list_campaigns),
        )
        .route(
            "/api/ads/headlines/generate",
            post(ads::handlers::handle_generate_headlines),
        )
        // Competitors
        .route(
            "/api/competitors",
            get(competitors::handlers::handle_list_competitors)
                .post(competitors::handlers::handle_add_competitor),
        )
        // Analytics
        .route(
            "/api/analytics/dashboard",
            get(analytics::handle_dashboard),
        )
        // Workflows
        .route("/api/workflows", get(workflows::handle_list_workflows))
        .route(
            "/api/workflows/:id/status",
            get(workflows::handle_workflow_status),
        )
        .route(
            "/api/workflows/:id/start",
            post(workflows::handle_start_workflow),
        )
        .route(
            "/api/workflows/:id/stop",
            post(workflows::handle_stop_workflow),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;

    fn app() -> Router {
        build_router(AppState::for_tests())
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_root_and_health() {
        let app = app();
        let (status, body) = send(&app, Method::GET, "/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "active");

        let (status, body) = send(&app, Method::GET, "/api/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    /// Import → connection campaign over every imported contact.
    #[tokio::test]
    async fn test_alumni_import_then_connection_campaign() {
        let app = app();

        let (status, body) =
            send(&app, Method::POST, "/api/alumni/import", Some(json!({}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["imported"], 3);

        let (_, body) = send(&app, Method::GET, "/api/alumni", None).await;
        let alumni = body["alumni"].as_array().unwrap();
        let expected = [
            ("John Smith", "MIT", 2020),
            ("Sarah Johnson", "Stanford", 2019),
            ("Mike Chen", "Harvard", 2021),
        ];
        assert_eq!(alumni.len(), 3);
        for (contact, (name, university, year)) in alumni.iter().zip(expected) {
            assert_eq!(contact["name"], name);
            assert_eq!(contact["university"], university);
            assert_eq!(contact["graduation_year"], year);
            assert_eq!(contact["status"], "pending");
        }
        let ids: Vec<Value> = alumni.iter().map(|c| c["id"].clone()).collect();

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/alumni/campaign/start",
            Some(json!({ "campaign_type": "connection", "alumni_ids": ids })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["contacts_processed"], 3);
        assert_eq!(body["campaign_type"], "connection");
        assert_eq!(body["message"], "Started connection campaign for 3 contacts");

        let (_, body) = send(&app, Method::GET, "/api/alumni", None).await;
        assert!(body["alumni"]
            .as_array()
            .unwrap()
            .iter()
            .all(|c| c["status"] == "connection_sent"));

        let (_, body) = send(&app, Method::GET, "/api/alumni/stats", None).await;
        assert_eq!(body["total"], 3);
        assert_eq!(body["by_status"]["connection_sent"], 3);
        assert_eq!(body["by_status"]["pending"], 0);
    }

    #[tokio::test]
    async fn test_second_import_continues_ids() {
        let app = app();
        send(&app, Method::POST, "/api/alumni/import", None).await;
        send(&app, Method::POST, "/api/alumni/import", None).await;

        let (_, body) = send(&app, Method::GET, "/api/alumni", None).await;
        let alumni = body["alumni"].as_array().unwrap();
        assert_eq!(alumni.len(), 6);
        assert_eq!(alumni[3]["id"], "alumni_4");
        assert_eq!(alumni[5]["id"], "alumni_6");
    }

    #[tokio::test]
    async fn test_alumni_status_update_and_silent_miss() {
        let app = app();
        send(&app, Method::POST, "/api/alumni/import", None).await;

        let (status, _) = send(
            &app,
            Method::PUT,
            "/api/alumni/alumni_2/status",
            Some(json!({ "status": "story_sent" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(
            &app,
            Method::PUT,
            "/api/alumni/alumni_77/status",
            Some(json!({ "status": "follow_sent" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);

        let (_, body) = send(&app, Method::GET, "/api/alumni/stats", None).await;
        assert_eq!(body["by_status"]["story_sent"], 1);
        assert_eq!(body["by_status"]["follow_sent"], 0);
        assert_eq!(body["by_status"]["pending"], 2);
    }

    #[tokio::test]
    async fn test_generate_then_schedule() {
        let app = app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/content/generate",
            Some(json!({ "topic": "Student Life", "audience": "Students", "tone": "Casual" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Generated 3 content variations");
        let posts = body["posts"].as_array().unwrap();
        assert_eq!(posts.len(), 3);
        assert_eq!(posts[0]["id"], "post_1");
        assert_eq!(posts[0]["status"], "draft");
        assert!(posts[0]["content"]
            .as_str()
            .unwrap()
            .ends_with("#StudentLife #StudentsSuccess #LinkedInGrowth"));

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/content/schedule",
            Some(json!({ "post_id": "post_2", "scheduled_date": "2025-03-01T09:00:00" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Post scheduled successfully");

        let (_, body) = send(&app, Method::GET, "/api/content/posts", None).await;
        let posts = body["posts"].as_array().unwrap();
        assert_eq!(posts[1]["status"], "scheduled");
        assert_eq!(posts[1]["scheduled_date"], "2025-03-01T09:00:00");
        assert_eq!(posts[0]["status"], "draft");
    }

    #[tokio::test]
    async fn test_schedule_unknown_post_reports_success() {
        let app = app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/content/schedule",
            Some(json!({ "post_id": "post_404", "scheduled_date": "2025-03-01" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);

        let (_, body) = send(&app, Method::GET, "/api/content/posts", None).await;
        assert!(body["posts"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_post_content() {
        let app = app();
        send(
            &app,
            Method::POST,
            "/api/content/generate",
            Some(json!({ "topic": "Campus Events", "audience": "Clubs", "tone": "Educational" })),
        )
        .await;

        let (status, _) = send(
            &app,
            Method::PUT,
            "/api/content/posts/post_3",
            Some(json!({ "content": "Edited by hand" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = send(&app, Method::GET, "/api/content/posts", None).await;
        assert_eq!(body["posts"][2]["content"], "Edited by hand");
        assert_eq!(body["posts"][2]["status"], "draft");
    }

    #[tokio::test]
    async fn test_create_campaign_and_dashboard() {
        let app = app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/ads/campaign",
            Some(json!({
                "name": "Spring Push",
                "budget": 500.0,
                "target_audience": "students",
                "headlines": ["Join now", "Grow today"]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["campaign"]["id"], "campaign_1");
        assert_eq!(body["campaign"]["status"], "active");
        assert_eq!(body["campaign"]["performance"]["impressions"], 0);

        let (_, body) = send(&app, Method::GET, "/api/ads/campaigns", None).await;
        assert_eq!(body["campaigns"].as_array().unwrap().len(), 1);

        let (_, body) = send(&app, Method::GET, "/api/analytics/dashboard", None).await;
        assert_eq!(body["ad_campaigns_active"], 1);
        assert_eq!(body["content_generated"], 0);
        assert_eq!(body["total_followers"], 15420);
    }

    #[tokio::test]
    async fn test_create_campaign_missing_field_is_rejected() {
        let app = app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/ads/campaign",
            Some(json!({ "name": "No budget", "target_audience": "students", "headlines": [] })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "missing required field: budget");

        let (_, body) = send(&app, Method::GET, "/api/ads/campaigns", None).await;
        assert!(body["campaigns"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_json_uses_error_envelope() {
        let app = app();
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/content/generate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_headlines_default_audience() {
        let app = app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/ads/headlines/generate",
            Some(json!({})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Generated 10 headlines for students");
        let headlines = body["headlines"].as_array().unwrap();
        assert_eq!(headlines.len(), 10);
        assert_eq!(
            headlines[1],
            "Unlock Your Potential: The #1 Platform for Students"
        );
    }

    #[tokio::test]
    async fn test_add_and_list_competitors() {
        let app = app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/competitors",
            Some(json!({ "name": "Acme", "linkedin_url": "https://linkedin.com/company/acme" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["competitor"]["id"], "competitor_1");
        assert_eq!(body["competitor"]["follower_count"], 25000);
        assert_eq!(body["competitor"]["recent_posts"].as_array().unwrap().len(), 2);

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/competitors",
            Some(json!({ "name": "No URL" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "missing required field: linkedin_url");

        let (_, body) = send(&app, Method::GET, "/api/competitors", None).await;
        assert_eq!(body["competitors"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_workflow_catalog_is_static() {
        let app = app();
        let (_, body) = send(&app, Method::GET, "/api/workflows", None).await;
        assert_eq!(body["workflows"].as_array().unwrap().len(), 5);
        assert_eq!(body["workflows"][4]["status"], "inactive");
        assert!(body["workflows"][4]["next_run"].is_null());

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/workflows/viral_amplification/start",
            Some(json!({ "threshold": 500 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "started");
        assert_eq!(body["workflow_id"], "viral_amplification");

        let (_, body) = send(
            &app,
            Method::GET,
            "/api/workflows/viral_amplification/status",
            None,
        )
        .await;
        assert_eq!(body["status"], "inactive");

        let (status, body) = send(&app, Method::POST, "/api/workflows/x/stop", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Workflow x stopped successfully");

        let (status, body) = send(&app, Method::GET, "/api/workflows/nope/status", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
