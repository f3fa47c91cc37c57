use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::Record;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostStatus {
    #[default]
    Draft,
    Scheduled,
}

/// A generated LinkedIn post. Created as a draft, later scheduled; never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentPost {
    pub id: String,
    pub content: String,
    pub topic: String,
    pub audience: String,
    pub tone: String,
    pub status: PostStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ContentPost {
    pub fn draft(content: String, topic: &str, audience: &str, tone: &str) -> Self {
        ContentPost {
            id: String::new(),
            content,
            topic: topic.to_string(),
            audience: audience.to_string(),
            tone: tone.to_string(),
            status: PostStatus::Draft,
            scheduled_date: None,
            created_at: Utc::now(),
        }
    }

    pub fn schedule(&mut self, scheduled_date: Option<String>) {
        self.status = PostStatus::Scheduled;
        self.scheduled_date = scheduled_date;
    }
}

impl Record for ContentPost {
    const KIND: &'static str = "post";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
