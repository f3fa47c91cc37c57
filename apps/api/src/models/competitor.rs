use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorPost {
    pub content: String,
    pub engagement: u32,
    pub date: String,
}

/// Metrics reported by a competitor data source for one LinkedIn profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorSnapshot {
    pub follower_count: u64,
    pub engagement_rate: f64,
    /// Posts per week.
    pub post_frequency: u32,
    pub recent_posts: Vec<CompetitorPost>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Competitor {
    pub id: String,
    pub name: String,
    pub linkedin_url: String,
    pub follower_count: u64,
    pub engagement_rate: f64,
    pub post_frequency: u32,
    pub last_updated: DateTime<Utc>,
    pub recent_posts: Vec<CompetitorPost>,
}

impl Competitor {
    pub fn new(name: String, linkedin_url: String, snapshot: CompetitorSnapshot) -> Self {
        Competitor {
            id: String::new(),
            name,
            linkedin_url,
            follower_count: snapshot.follower_count,
            engagement_rate: snapshot.engagement_rate,
            post_frequency: snapshot.post_frequency,
            last_updated: Utc::now(),
            recent_posts: snapshot.recent_posts,
        }
    }
}

impl Record for Competitor {
    const KIND: &'static str = "competitor";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
