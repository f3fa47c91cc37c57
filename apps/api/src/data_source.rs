//! Growth data sources: pluggable, trait-based providers for the data that a
//! real LinkedIn integration would supply (alumni lists, competitor metrics,
//! ad copy).
//!
//! Default: `MockDataSource` (fixed, deterministic data).
//!
//! `AppState` holds an `Arc<dyn GrowthDataSource>`, chosen at startup.

use async_trait::async_trait;

use crate::ads::headlines::render_headlines;
use crate::errors::AppError;
use crate::models::alumni::AlumniSeed;
use crate::models::competitor::{CompetitorPost, CompetitorSnapshot};

/// Implement this to swap the data backend without touching handlers or the stores.
#[async_trait]
pub trait GrowthDataSource: Send + Sync {
    async fn import_alumni(&self) -> Result<Vec<AlumniSeed>, AppError>;

    async fn competitor_snapshot(
        &self,
        name: &str,
        linkedin_url: &str,
    ) -> Result<CompetitorSnapshot, AppError>;

    async fn ad_headlines(&self, target_audience: &str) -> Result<Vec<String>, AppError>;
}

/// Returns the same canned data for every call.
pub struct MockDataSource;

#[async_trait]
impl GrowthDataSource for MockDataSource {
    async fn import_alumni(&self) -> Result<Vec<AlumniSeed>, AppError> {
        Ok(vec![
            seed("John Smith", "MIT", 2020),
            seed("Sarah Johnson", "Stanford", 2019),
            seed("Mike Chen", "Harvard", 2021),
        ])
    }

    async fn competitor_snapshot(
        &self,
        _name: &str,
        _linkedin_url: &str,
    ) -> Result<CompetitorSnapshot, AppError> {
        Ok(CompetitorSnapshot {
            follower_count: 25_000,
            engagement_rate: 4.2,
            post_frequency: 5,
            recent_posts: vec![
                recent_post("Latest industry insights...", 150, "2024-01-15"),
                recent_post("Career advice for professionals...", 230, "2024-01-14"),
            ],
        })
    }

    async fn ad_headlines(&self, target_audience: &str) -> Result<Vec<String>, AppError> {
        Ok(render_headlines(target_audience))
    }
}

fn seed(name: &str, university: &str, graduation_year: i32) -> AlumniSeed {
    AlumniSeed {
        name: name.to_string(),
        university: university.to_string(),
        graduation_year,
    }
}

fn recent_post(content: &str, engagement: u32, date: &str) -> CompetitorPost {
    CompetitorPost {
        content: content.to_string(),
        engagement,
        date: date.to_string(),
    }
}
